//! Thin web-sys glue. Every helper degrades to a no-op when the browser
//! surface it needs is missing (no window, no storage, no observer), so
//! the rest of the page keeps working without it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// All elements matching a selector, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Some(document) = document() {
        if let Ok(nodes) = document.query_selector_all(selector) {
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        found.push(el);
                    }
                }
            }
        }
    }
    found
}

pub fn storage_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(value) = storage.get_item(key) {
            return value;
        }
    }
    None
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Mirrors the active theme on `<body data-theme="...">`, which the global
/// stylesheet keys its variables off.
pub fn set_body_theme(theme: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme);
    }
}

/// The `nav-open` class on `<body>` is the single source of truth for the
/// mobile menu. Components toggle or clear it; none of them mirror it.
pub fn toggle_mobile_menu() {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle("nav-open");
    }
}

pub fn close_mobile_menu() {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().remove_1("nav-open");
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scrolls to an element by id; silently does nothing if it is not
/// on the page.
pub fn scroll_to_id(id: &str) {
    if let Some(el) = element_by_id(id) {
        smooth_scroll_to(&el);
    }
}

pub fn supports_intersection_observer() -> bool {
    match web_sys::window() {
        Some(window) => {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        }
        None => false,
    }
}

/// An `IntersectionObserver` together with the callback closure it fires
/// into. The closure has to stay alive as long as the observer does.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Builds an observer that hands entries to `on_entry` one at a time, in
/// delivery order. Returns `None` when the environment has no
/// `IntersectionObserver`.
pub fn observe_intersections(
    threshold: f64,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Option<ObserverHandle> {
    if !supports_intersection_observer() {
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    Some(ObserverHandle {
        observer,
        _callback: callback,
    })
}
