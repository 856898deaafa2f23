use crate::app::Shared;
use crate::dom::{self, ListenerGuard};
use globe_core::keys::{panel_action_for_key, shortcuts_apply_to};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Typing into a host text field or editable region.
fn targets_editable(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
        .is_some_and(|el| !shortcuts_apply_to(&el.tag_name(), el.is_content_editable()))
}

/// Panel shortcuts. Keys pass through untouched while the panel is closed.
pub fn wire_keyboard(shared: &Rc<Shared>) -> anyhow::Result<ListenerGuard> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let shared = shared.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        if !shared.is_open() || targets_editable(&ev) {
            return;
        }
        if let Some(action) = panel_action_for_key(&ev.key()) {
            shared.dispatch(action);
            ev.prevent_default();
        }
    })
}
