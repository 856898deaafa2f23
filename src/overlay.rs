use crate::constants::STATUS_CLASS;
use crate::dom;
use globe_core::markup::{status_html, STATUS_STYLE};
use web_sys as web;

/// The "Debug: ..." line in the top-left corner of the container.
pub struct StatusLine {
    el: web::HtmlElement,
}

impl StatusLine {
    pub fn attach(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let el: web::HtmlElement = dom::create_element(document, "div")?;
        el.set_class_name(STATUS_CLASS);
        _ = el.set_attribute("style", STATUS_STYLE);
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append status: {:?}", e))?;
        Ok(Self { el })
    }

    pub fn set(&self, message: &str) {
        log::info!("[status] {}", message);
        self.el.set_inner_html(&status_html(message));
    }

    pub fn detach(&self) {
        self.el.remove();
    }
}
