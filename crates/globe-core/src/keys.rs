use crate::selection::PanelAction;

/// Keyboard shortcut for the open panel, keyed by `KeyboardEvent.key`.
#[inline]
pub fn panel_action_for_key(key: &str) -> Option<PanelAction> {
    match key {
        "Escape" | "Esc" => Some(PanelAction::Close),
        "ArrowLeft" => Some(PanelAction::PrevPhoto),
        "ArrowRight" => Some(PanelAction::NextPhoto),
        "ArrowUp" | "PageUp" => Some(PanelAction::PrevEvent),
        "ArrowDown" | "PageDown" => Some(PanelAction::NextEvent),
        _ => None,
    }
}

/// Whether panel shortcuts may act on a key event whose target has
/// `tag_name`. Text fields and editable regions keep their keys.
pub fn shortcuts_apply_to(tag_name: &str, is_content_editable: bool) -> bool {
    if is_content_editable {
        return false;
    }
    !["INPUT", "TEXTAREA", "SELECT"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag_name))
}
