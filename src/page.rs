// Page handle: named lookups for the elements the controller drives, plus the
// small styling surface the behaviours mutate.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::Selectors;
use crate::error::{Result, WiringError};

/// The only element operations the behaviours need. Implemented for real
/// elements and for an in-memory fake in tests.
pub trait Styled {
    fn set_class(&self, class: &str, on: bool);
    fn set_style(&self, property: &str, value: &str);
}

impl Styled for HtmlElement {
    fn set_class(&self, class: &str, on: bool) {
        let _ = self.class_list().toggle_with_force(class, on);
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }
}

#[derive(Clone)]
pub struct PageHandle {
    pub window: Window,
    pub document: Document,
    selectors: Selectors,
}

impl PageHandle {
    pub fn new(window: Window, document: Document, selectors: Selectors) -> Self {
        Self {
            window,
            document,
            selectors,
        }
    }

    pub fn body(&self) -> Result<HtmlElement> {
        self.document.body().ok_or_else(|| missing("body"))
    }

    pub fn nav_trigger(&self) -> Result<HtmlElement> {
        self.one(&self.selectors.nav_trigger)
    }

    pub fn nav_menu(&self) -> Result<HtmlElement> {
        self.one(&self.selectors.nav_menu)
    }

    pub fn menu_links(&self) -> Vec<HtmlElement> {
        self.all(&self.selectors.menu_links)
    }

    pub fn fragment_links(&self) -> Vec<HtmlElement> {
        self.all(&self.selectors.fragment_links)
    }

    pub fn header_bar(&self) -> Result<HtmlElement> {
        self.one(&self.selectors.header_bar)
    }

    pub fn map_container(&self) -> Result<HtmlElement> {
        self.by_id(&self.selectors.map_container_id)
            .ok_or_else(|| missing(&format!("#{}", self.selectors.map_container_id)))
    }

    /// Content cards to reveal. An empty match counts as missing.
    pub fn cards(&self) -> Result<Vec<HtmlElement>> {
        non_empty(self.all(&self.selectors.cards), &self.selectors.cards)
    }

    fn by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// Document-relative top of the element with `id`, whatever its kind
    /// (SVG targets included).
    pub fn top_of_id(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| self.document_top(&el))
    }

    /// Top of `el` relative to the document, not the viewport.
    pub fn document_top(&self, el: &Element) -> f64 {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        el.get_bounding_client_rect().top() + scroll_y
    }

    fn one(&self, selector: &str) -> Result<HtmlElement> {
        self.document
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| missing(selector))
    }

    fn all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

fn missing(what: &str) -> WiringError {
    WiringError::MissingElement(what.to_string())
}

fn non_empty<T>(items: Vec<T>, selector: &str) -> Result<Vec<T>> {
    if items.is_empty() {
        Err(missing(selector))
    } else {
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_match_is_missing() {
        let err = non_empty(Vec::<u8>::new(), ".product-card").unwrap_err();
        assert!(matches!(err, WiringError::MissingElement(ref s) if s == ".product-card"));
    }

    #[test]
    fn non_empty_match_passes_through() {
        assert_eq!(non_empty(vec![1, 2, 3], ".product-card").unwrap(), vec![1, 2, 3]);
    }
}
