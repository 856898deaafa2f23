// Host-side tests for panel and status markup.

use globe_core::markup::{escape_html, panel_html, status_html};
use globe_core::{Atlas, Selection};

fn panel_for(name: &str, event: usize, photo: usize) -> String {
    let atlas = Atlas::builtin().unwrap();
    let s = Selection::Open {
        city: atlas.id_of(name).unwrap(),
        event,
        photo,
    };
    panel_html(&s.view(&atlas).unwrap())
}

#[test]
fn html_special_characters_are_escaped() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("Döner"), "Döner");
}

#[test]
fn status_line_is_prefixed_and_escaped() {
    assert_eq!(status_html("Initializing..."), "Debug: Initializing...");
    assert_eq!(status_html("<oops>"), "Debug: &lt;oops&gt;");
}

#[test]
fn panel_shows_city_event_and_photo() {
    let atlas = Atlas::builtin().unwrap();
    let tokyo = atlas.by_name("Tokyo").unwrap();
    let html = panel_for("Tokyo", 0, 1);
    assert!(html.contains("Tokyo</h1>"));
    assert!(html.contains(&tokyo.events[0].name));
    assert!(html.contains(&format!("Date: {}", tokyo.events[0].date)));
    assert!(html.contains(&format!("src='{}'", tokyo.events[0].photos[1])));
    for section in ["Events", "Attractions", "Local Cuisine", "Transportation"] {
        assert!(html.contains(&format!("{section}</h2>")), "{section}");
    }
    assert!(html.contains("data-action='close'"));
}

#[test]
fn navigation_buttons_are_disabled_at_the_bounds() {
    let first = panel_for("Berlin", 0, 0);
    assert!(first.contains("data-action='prev-event' disabled"));
    assert!(first.contains("data-action='prev-photo' disabled"));
    assert!(first.contains("data-action='next-event' style"));
    assert!(first.contains("data-action='next-photo' style"));

    let last = panel_for("Berlin", 1, 2);
    assert!(last.contains("data-action='next-event' disabled"));
    assert!(last.contains("data-action='next-photo' disabled"));
    assert!(last.contains("data-action='prev-event' style"));
}
