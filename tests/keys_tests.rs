// Host-side tests for panel keyboard shortcuts.

use globe_core::keys::panel_action_for_key;
use globe_core::PanelAction;

#[test]
fn escape_closes_the_panel() {
    assert_eq!(panel_action_for_key("Escape"), Some(PanelAction::Close));
    assert_eq!(panel_action_for_key("Esc"), Some(PanelAction::Close));
}

#[test]
fn arrows_step_photos_and_events() {
    assert_eq!(panel_action_for_key("ArrowLeft"), Some(PanelAction::PrevPhoto));
    assert_eq!(panel_action_for_key("ArrowRight"), Some(PanelAction::NextPhoto));
    assert_eq!(panel_action_for_key("ArrowUp"), Some(PanelAction::PrevEvent));
    assert_eq!(panel_action_for_key("ArrowDown"), Some(PanelAction::NextEvent));
    assert_eq!(panel_action_for_key("PageUp"), Some(PanelAction::PrevEvent));
    assert_eq!(panel_action_for_key("PageDown"), Some(PanelAction::NextEvent));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", "Enter", " ", "h", "escape"] {
        assert_eq!(panel_action_for_key(key), None, "{key:?}");
    }
}

#[test]
fn text_fields_keep_their_keys() {
    use globe_core::keys::shortcuts_apply_to;
    for tag in ["INPUT", "TEXTAREA", "SELECT", "input"] {
        assert!(!shortcuts_apply_to(tag, false), "{tag}");
    }
    assert!(!shortcuts_apply_to("DIV", true));
    assert!(shortcuts_apply_to("BODY", false));
    assert!(shortcuts_apply_to("CANVAS", false));
    assert!(shortcuts_apply_to("BUTTON", false));
}
