//! HTML for the side panel and the status line.
//!
//! Kept free of DOM types so the markup can be checked on the host; the web
//! front-end only assigns the returned strings to `innerHTML`.

use crate::selection::{PanelAction, PanelView};
use std::fmt::Write;

const SECTION_H2: &str = "font-size: 1.5em; margin-bottom: 15px;";
const NAV_BUTTON: &str =
    "padding: 5px 10px; background: #4CAF50; color: white; border: none; cursor: pointer;";
const PHOTO_BUTTON: &str = "position: absolute; top: 50%; transform: translateY(-50%); \
     background: rgba(0,0,0,0.5); border: none; color: white; cursor: pointer; font-size: 24px;";

pub const PANEL_STYLE: &str = "position: absolute; top: 0; right: 0; width: 50%; height: 100%; \
     box-sizing: border-box; background: rgba(0,0,0,0.9); color: white; padding: 20px; \
     overflow-y: auto; box-shadow: -5px 0 15px rgba(0,0,0,0.5);";
pub const STATUS_STYLE: &str = "position: absolute; top: 10px; left: 10px; \
     background: rgba(0,0,0,0.7); color: white; padding: 10px; border-radius: 5px; \
     font: 13px system-ui;";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn status_html(message: &str) -> String {
    format!("Debug: {}", escape_html(message))
}

fn button(action: PanelAction, enabled: bool, style: &str, label: &str) -> String {
    let name = action.dom_action().unwrap_or_default();
    let (disabled, opacity) = if enabled { ("", 1.0) } else { (" disabled", 0.5) };
    format!(
        "<button type='button' data-action='{name}'{disabled} style='{style} opacity: {opacity};'>{label}</button>"
    )
}

fn list(out: &mut String, title: &str, items: &[String]) {
    let _ = write!(out, "<h2 style='{SECTION_H2}'>{}</h2>", escape_html(title));
    out.push_str("<ul style='margin-bottom: 20px;'>");
    for item in items {
        let _ = write!(out, "<li style='margin-bottom: 5px;'>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
}

pub fn panel_html(view: &PanelView<'_>) -> String {
    let city = view.city;
    let event = view.event;
    let mut out = String::with_capacity(2048);

    out.push_str(&button(
        PanelAction::Close,
        true,
        "position: absolute; top: 10px; right: 10px; background: none; border: none; \
         color: white; cursor: pointer; font-size: 24px;",
        "&times;",
    ));
    let _ = write!(
        out,
        "<h1 style='font-size: 2em; margin-bottom: 20px;'>{}</h1>",
        escape_html(&city.name)
    );
    let _ = write!(
        out,
        "<p style='font-size: 1.1em; margin-bottom: 20px;'>{}</p>",
        escape_html(&city.overview)
    );

    let _ = write!(out, "<h2 style='{SECTION_H2}'>Events</h2>");
    out.push_str("<div style='position: relative;'>");
    let _ = write!(
        out,
        "<img src='{}' alt='Event' style='width: 100%; height: 300px; object-fit: cover; margin-bottom: 10px;'>",
        escape_html(view.photo)
    );
    out.push_str(&button(
        PanelAction::PrevPhoto,
        view.can_prev_photo(),
        &format!("{PHOTO_BUTTON} left: 10px;"),
        "&#8249;",
    ));
    out.push_str(&button(
        PanelAction::NextPhoto,
        view.can_next_photo(),
        &format!("{PHOTO_BUTTON} right: 10px;"),
        "&#8250;",
    ));
    out.push_str("</div>");

    let _ = write!(
        out,
        "<h3 style='font-size: 1.2em; margin-bottom: 10px;'>{}</h3>",
        escape_html(&event.name)
    );
    let _ = write!(
        out,
        "<p style='margin-bottom: 10px;'>{}</p>",
        escape_html(&event.description)
    );
    let _ = write!(
        out,
        "<p style='margin-bottom: 20px;'>Date: {}</p>",
        escape_html(&event.date)
    );

    out.push_str(
        "<div style='display: flex; justify-content: space-between; margin-bottom: 20px;'>",
    );
    out.push_str(&button(
        PanelAction::PrevEvent,
        view.can_prev_event(),
        NAV_BUTTON,
        "Previous Event",
    ));
    out.push_str(&button(
        PanelAction::NextEvent,
        view.can_next_event(),
        NAV_BUTTON,
        "Next Event",
    ));
    out.push_str("</div>");

    list(&mut out, "Attractions", &city.attractions);
    list(&mut out, "Local Cuisine", &city.cuisine);

    let _ = write!(out, "<h2 style='{SECTION_H2}'>Transportation</h2>");
    let _ = write!(out, "<p>{}</p>", escape_html(&city.transport));
    out
}
