use crate::app::Shared;
use crate::dom::{self, ListenerGuard};
use globe_core::PanelAction;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

mod keyboard;
mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;

/// Keep the canvas backing store at CSS size * devicePixelRatio.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<ListenerGuard> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas_resize = canvas.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

/// One delegated click listener for every `data-action` button in the panel.
pub fn wire_panel_actions(shared: &Rc<Shared>) -> anyhow::Result<ListenerGuard> {
    let target = shared.panel.element().clone();
    let shared = shared.clone();
    dom::listen(&target, "click", move |ev: web::MouseEvent| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let action = el
            .closest("[data-action]")
            .ok()
            .flatten()
            .and_then(|b| b.get_attribute("data-action"))
            .and_then(|a| PanelAction::from_dom_action(&a));
        if let Some(action) = action {
            shared.dispatch(action);
            ev.stop_propagation();
        }
    })
}
