use crate::constants::*;
use crate::dom;
use crate::style;
use folio_core::{Placement, PopoverConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM for one popover: a full-screen layer holding an optional backdrop and
/// the panel. Appended to `<body>` so ancestors' overflow cannot clip it.
pub struct PopoverView {
    layer: web::HtmlElement,
    backdrop: web::HtmlElement,
    panel: web::HtmlElement,
    arrow: web::HtmlElement,
    title: web::HtmlElement,
    body: web::HtmlElement,
}

fn create(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

fn append(parent: &web::HtmlElement, child: &web::HtmlElement) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))
}

impl PopoverView {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let body_el = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
        let layer = create(document, POPOVER_LAYER_CLASS)?;
        let backdrop = create(document, POPOVER_BACKDROP_CLASS)?;
        let panel = create(document, POPOVER_PANEL_CLASS)?;
        let arrow = create(document, POPOVER_ARROW_CLASS)?;
        let title = create(document, POPOVER_TITLE_CLASS)?;
        let body = create(document, POPOVER_BODY_CLASS)?;

        _ = backdrop.set_attribute("aria-hidden", "true");
        _ = panel.set_attribute("role", "dialog");
        append(&panel, &arrow)?;
        append(&panel, &title)?;
        append(&panel, &body)?;
        append(&layer, &backdrop)?;
        append(&layer, &panel)?;
        append(&body_el, &layer)?;

        let view = Self {
            layer,
            backdrop,
            panel,
            arrow,
            title,
            body,
        };
        view.hide();
        Ok(view)
    }

    pub fn backdrop(&self) -> &web::HtmlElement {
        &self.backdrop
    }

    pub fn panel(&self) -> &web::HtmlElement {
        &self.panel
    }

    pub fn set_content(&self, title: &str, html: &str) {
        self.title.set_text_content(Some(title));
        _ = self.title.class_list().toggle_with_force(HIDDEN_CLASS, title.is_empty());
        self.body.set_inner_html(html);
        _ = self.panel.set_attribute("aria-label", if title.is_empty() { "Details" } else { title });
    }

    /// Mount invisibly so the panel can be measured before it is placed.
    pub fn show_for_measuring(&self, viewport: Viewport, cfg: &PopoverConfig) {
        _ = self.layer.class_list().remove_1(HIDDEN_CLASS);
        dom::apply_style(
            &self.panel,
            &style::measuring_declarations(cfg.max_width_for(viewport.width)),
        );
    }

    pub fn measure(&self) -> Option<folio_core::Size> {
        dom::measure(&self.panel)
    }

    pub fn render(&self, placement: &Placement, backdrop: bool, cfg: &PopoverConfig) {
        _ = self.layer.class_list().remove_1(HIDDEN_CLASS);
        _ = self
            .layer
            .class_list()
            .toggle_with_force(MODAL_CLASS, placement.is_modal());
        _ = self
            .backdrop
            .class_list()
            .toggle_with_force(HIDDEN_CLASS, !backdrop);
        dom::apply_style(&self.panel, &style::panel_declarations(placement));
        dom::apply_style(
            &self.arrow,
            &style::arrow_declarations(placement.arrow_side(), cfg.arrow_inset),
        );
    }

    /// Pointer capture on the panel: `false` lets clicks fall through.
    pub fn set_capture_pointer(&self, capture: bool) {
        _ = self
            .panel
            .style()
            .set_property("pointer-events", if capture { "auto" } else { "none" });
    }

    pub fn hide(&self) {
        _ = self.layer.class_list().add_1(HIDDEN_CLASS);
        _ = self.backdrop.class_list().add_1(HIDDEN_CLASS);
        _ = self.panel.style().set_property("visibility", "hidden");
    }
}
