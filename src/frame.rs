//! Cancellable `requestAnimationFrame` loop.
//!
//! The closure reschedules itself only while `running` is set, and the
//! pending frame handle is kept so `cancel` can revoke it. The closure holds
//! a weak reference to its own slot; the `FrameLoop` owns the only strong
//! one, so dropping the loop frees the closure. `cancel` must not be called
//! from inside the frame callback.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = RefCell<Option<Closure<dyn FnMut(f64)>>>;

pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<TickSlot>,
}

fn schedule(slot: &TickSlot, handle: &Cell<Option<i32>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl FrameLoop {
    /// Start calling `on_frame` once per animation frame with the frame
    /// timestamp in milliseconds.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(None));
        let tick: Rc<TickSlot> = Rc::new(RefCell::new(None));

        let weak_tick: Weak<TickSlot> = Rc::downgrade(&tick);
        let running_tick = running.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            on_frame(timestamp_ms);
            if !running_tick.get() {
                return;
            }
            if let Some(slot) = weak_tick.upgrade() {
                schedule(&slot, &handle_tick);
            }
        }) as Box<dyn FnMut(f64)>));

        schedule(&tick, &handle);
        Self {
            running,
            handle,
            tick,
        }
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop cancelled");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
