use crate::constants::PANEL_CLASS;
use crate::dom;
use globe_core::markup::{panel_html, PANEL_STYLE};
use globe_core::PanelView;
use web_sys as web;

/// Side panel showing the selected city. Hidden while nothing is selected.
pub struct Panel {
    el: web::HtmlElement,
}

impl Panel {
    pub fn attach(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let el: web::HtmlElement = dom::create_element(document, "aside")?;
        el.set_class_name(PANEL_CLASS);
        let panel = Self { el };
        panel.hide();
        container
            .append_child(&panel.el)
            .map_err(|e| anyhow::anyhow!("append panel: {:?}", e))?;
        Ok(panel)
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.el
    }

    pub fn show(&self, view: &PanelView<'_>) {
        self.el.set_inner_html(&panel_html(view));
        _ = self.el.set_attribute("style", PANEL_STYLE);
    }

    #[inline]
    pub fn hide(&self) {
        self.el.set_inner_html("");
        _ = self.el.set_attribute("style", "display:none");
    }

    pub fn render(&self, view: Option<PanelView<'_>>) {
        match view {
            Some(v) => self.show(&v),
            None => self.hide(),
        }
    }
}
