#![forbid(unsafe_code)]

//! [`PageHost`] over the live document.
//!
//! Every call queries the document afresh; missing elements turn reads into
//! `None`/zero and writes into no-ops.

use evasive_layout::{ButtonPreset, EvasionGeometry, HeartPlacement, Point, Rect, Size};
use evasive_runtime::PageHost;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, NodeList, Window};

use crate::markup::{
    self, BUTTON_SELECTOR, CONTAINER_SELECTOR, EVADER_ID, HEART_SELECTOR, PROTECTED_SELECTOR,
    SCALED_SELECTOR, StyleWrite,
};

pub(crate) struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub(crate) fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn html(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn evader(&self) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(EVADER_ID)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn all(&self, selector: &str) -> Option<NodeList> {
        self.document.query_selector_all(selector).ok()
    }

    fn each_html(&self, selector: &str, mut f: impl FnMut(&HtmlElement)) {
        let Some(list) = self.all(selector) else {
            return;
        };
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                f(&el);
            }
        }
    }

    fn window_extent(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> i32 {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(0, markup::whole_px)
    }
}

fn apply(el: &HtmlElement, styles: &[StyleWrite]) {
    let style = el.style();
    for (property, value) in styles {
        if style.set_property(property, value).is_err() {
            tracing::warn!(message = "dom.style_rejected", property = *property, value = %value);
        }
    }
}

impl PageHost for DomHost {
    fn viewport(&self) -> Size {
        Size::new(
            Self::window_extent(self.window.inner_width()),
            Self::window_extent(self.window.inner_height()),
        )
    }

    fn evasion_geometry(&self) -> Option<EvasionGeometry> {
        let evader = self.evader()?;
        let protected = self.html(PROTECTED_SELECTOR)?;
        let container = self.html(CONTAINER_SELECTOR)?;
        let bounds = container.get_bounding_client_rect();
        Some(EvasionGeometry {
            container: Size::new(
                markup::whole_px(bounds.width()),
                markup::whole_px(bounds.height()),
            ),
            protected: Rect::new(
                protected.offset_left(),
                protected.offset_top(),
                protected.offset_width(),
                protected.offset_height(),
            ),
            element: Size::new(evader.offset_width(), evader.offset_height()),
        })
    }

    fn move_evader(&mut self, position: Point) {
        if let Some(evader) = self.evader() {
            apply(&evader, &markup::evader_style(position));
        }
    }

    fn set_evader_label(&mut self, label: &str) {
        if let Some(evader) = self.evader() {
            evader.set_text_content(Some(label));
        }
    }

    fn scale_containers(&mut self, factor: f64) {
        let styles = markup::container_scale_style(factor);
        self.each_html(SCALED_SELECTOR, |el| apply(el, &styles));
    }

    fn set_root_font_rem(&mut self, rem: f64) {
        let root = self
            .document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(root) = root {
            apply(&root, &[("font-size", markup::rem(rem))]);
        }
    }

    fn style_buttons(&mut self, preset: &ButtonPreset) {
        let styles = markup::button_style(preset);
        self.each_html(BUTTON_SELECTOR, |el| apply(el, &styles));
    }

    fn heart_count(&self) -> usize {
        self.all(HEART_SELECTOR)
            .map_or(0, |list| list.length() as usize)
    }

    fn place_heart(&mut self, index: usize, placement: &HeartPlacement) {
        let Ok(index) = u32::try_from(index) else {
            return;
        };
        let heart = self
            .all(HEART_SELECTOR)
            .and_then(|list| list.item(index))
            .and_then(|node| node.dyn_into::<HtmlElement>().ok());
        if let Some(heart) = heart {
            apply(&heart, &markup::heart_style(placement));
        }
    }

    fn location_path(&self) -> Option<String> {
        self.window.location().pathname().ok()
    }

    fn redirect(&mut self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            tracing::error!(message = "dom.redirect_failed", url, error = ?err);
        }
    }
}
