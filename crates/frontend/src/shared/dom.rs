//! Thin wrappers over the browser APIs the page state needs.

use contracts::shared::navigation::{NavigationError, SectionScroller};
use contracts::shared::viewport::{ObserverOptions, SectionBounds};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Vertical scroll offset of the window, `0.0` when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Offsets of every `<section>` on the page, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all("section").ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds::new(el.id(), el.offset_top() as f64, el.client_height() as f64))
        .collect()
}

/// Scrolls page sections by element id.
pub struct DomScroller;

impl SectionScroller for DomScroller {
    fn scroll_into_view(&self, section_id: &str) -> Result<(), NavigationError> {
        let element = document()
            .and_then(|d| d.get_element_by_id(section_id))
            .ok_or_else(|| NavigationError::SectionNotFound(section_id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// An `IntersectionObserver` bound to one element.
///
/// Holds the JS callback alive; call [`VisibilityObserver::disconnect`]
/// before dropping.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        target: &Element,
        options: ObserverOptions,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
