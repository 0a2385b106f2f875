//! web-sys implementations of the controller seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `browser` feature. Everything here is a thin
//! translation between DOM nodes and the browser-free controllers; decisions
//! are made in [`crate::state`] and [`crate::controller`].

pub mod carousel;
pub mod content;
pub mod menu;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target` for `event`.
    ///
    /// Returns `None` (and logs) if the browser refuses the listener.
    pub fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("failed to add {event} listener: {e:?}");
            return None;
        }
        Some(Self { target: target.clone(), event, callback })
    }

    /// Keep the listener attached for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to remove {} listener: {e:?}", self.event);
        }
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current `window.innerWidth`; unknown widths count as wide.
#[must_use]
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// First descendant of `parent` matching `selector`.
#[must_use]
pub fn query_one(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("invalid selector {selector}: {e:?}");
            None
        }
    }
}

/// Every descendant of `parent` matching `selector`, in document order.
#[must_use]
pub fn query_all(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("invalid selector {selector}: {e:?}");
            Vec::new()
        }
    }
}

/// Every element in `document` matching `selector`, in document order.
#[must_use]
pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("invalid selector {selector}: {e:?}");
            Vec::new()
        }
    }
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::warn!("failed to update class {class}: {e:?}");
    }
}

/// Set the inline `display` style of `el`.
pub fn set_display(el: &Element, value: &str) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = el.style().set_property("display", value) {
        log::warn!("failed to set display {value}: {e:?}");
    }
}
