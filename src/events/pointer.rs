use crate::app::Shared;
use crate::dom::{self, ListenerGuard};
use globe_core::PanelAction;
use std::rc::Rc;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Click-to-select plus orbit drag and wheel zoom on the canvas.
pub fn wire_pointer(
    shared: &Rc<Shared>,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<Vec<ListenerGuard>> {
    Ok(vec![
        wire_click(shared, canvas)?,
        wire_pointerdown(shared, canvas)?,
        wire_pointermove(shared, canvas)?,
        wire_pointerup(shared, canvas, "pointerup")?,
        wire_pointerup(shared, canvas, "pointercancel")?,
        wire_wheel(shared, canvas)?,
    ])
}

fn wire_click(shared: &Rc<Shared>, canvas: &web::HtmlCanvasElement) -> anyhow::Result<ListenerGuard> {
    let shared = shared.clone();
    let c = canvas.clone();
    dom::listen(canvas, "click", move |ev: web::MouseEvent| {
        let (x, y) = pointer_canvas_css(&ev, &c);
        let hit = shared.scene.borrow().pick_css(x, y);
        // Misses leave the selection alone.
        if let Some(city) = hit {
            shared.dispatch(PanelAction::Select(city));
        }
    })
}

fn wire_pointerdown(
    shared: &Rc<Shared>,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<ListenerGuard> {
    let shared = shared.clone();
    let c = canvas.clone();
    dom::listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let (x, y) = pointer_canvas_css(&ev, &c);
        shared.scene.borrow_mut().begin_drag(x, y);
        _ = c.set_pointer_capture(ev.pointer_id());
    })
}

fn wire_pointermove(
    shared: &Rc<Shared>,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<ListenerGuard> {
    let shared = shared.clone();
    let c = canvas.clone();
    dom::listen(canvas, "pointermove", move |ev: web::PointerEvent| {
        if !shared.scene.borrow().is_dragging() {
            return;
        }
        let (x, y) = pointer_canvas_css(&ev, &c);
        shared.scene.borrow_mut().drag_to(x, y);
    })
}

fn wire_pointerup(
    shared: &Rc<Shared>,
    canvas: &web::HtmlCanvasElement,
    kind: &'static str,
) -> anyhow::Result<ListenerGuard> {
    let shared = shared.clone();
    let c = canvas.clone();
    dom::listen(canvas, kind, move |ev: web::PointerEvent| {
        shared.scene.borrow_mut().end_drag();
        if c.has_pointer_capture(ev.pointer_id()) {
            _ = c.release_pointer_capture(ev.pointer_id());
        }
    })
}

fn wire_wheel(shared: &Rc<Shared>, canvas: &web::HtmlCanvasElement) -> anyhow::Result<ListenerGuard> {
    let shared = shared.clone();
    dom::listen(canvas, "wheel", move |ev: web::WheelEvent| {
        shared.scene.borrow_mut().zoom(ev.delta_y() as f32);
        ev.prevent_default();
    })
}
