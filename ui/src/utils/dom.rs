//! Browser DOM Helpers
//!
//! Thin wrappers over `web_sys` for the few things the login page does
//! outside of Dioxus rendering: moving focus, wrapping Tab, navigating and
//! reading timing data. Every helper degrades to a no-op when there is no
//! window.

use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement};

use crate::login::{wrap_target, FOCUSABLE_SELECTOR};
use crate::{console_debug, console_error, console_warn};

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Focus the element with the given id; false if it does not exist
pub fn focus_element(id: &str) -> bool {
    match html_element_by_id(id) {
        Some(el) => {
            if let Err(e) = el.focus() {
                console_warn!("Failed to focus #{}: {:?}", id, e);
                return false;
            }
            true
        }
        None => {
            console_debug!("No focusable element #{}", id);
            false
        }
    }
}

/// Focusable descendants of the container, in document order
fn focusable_elements(container_id: &str) -> Vec<HtmlElement> {
    let Some(container) = html_element_by_id(container_id) else {
        return Vec::new();
    };
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Wrap focus inside the container for a Tab key press.
///
/// Returns true when focus was moved, in which case the caller should
/// prevent the browser's default tab handling.
pub fn trap_tab_focus(container_id: &str, backwards: bool) -> bool {
    let elements = focusable_elements(container_id);
    let active = window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let active_index = active.and_then(|a| {
        elements
            .iter()
            .position(|el| AsRef::<web_sys::Element>::as_ref(el) == &a)
    });

    match wrap_target(elements.len(), active_index, backwards) {
        Some(target) => elements[target].focus().is_ok(),
        None => false,
    }
}

/// Send the browser to another page
pub fn navigate_to(href: &str) {
    let Some(win) = window() else {
        console_error!("No window to navigate from");
        return;
    };
    if let Err(e) = win.location().set_href(href) {
        console_error!("Navigation to {} failed: {:?}", href, e);
    }
}

/// Uniform sample in `[0, 1)` from the browser's RNG
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Duration of the load event; `None` until the event has finished
pub fn load_event_duration(start: f64, end: f64) -> Option<f64> {
    (end > 0.0 && end >= start).then(|| end - start)
}

fn timing_field(entry: &JsValue, name: &str) -> Option<f64> {
    Reflect::get(entry, &JsValue::from_str(name)).ok()?.as_f64()
}

/// `loadEventEnd - loadEventStart` of the navigation timing entry
pub fn navigation_load_time_ms() -> Option<f64> {
    let entry = window()?
        .performance()?
        .get_entries_by_type("navigation")
        .get(0);
    if entry.is_undefined() {
        return None;
    }
    load_event_duration(
        timing_field(&entry, "loadEventStart")?,
        timing_field(&entry, "loadEventEnd")?,
    )
}

/// Run `callback` once the window `load` event has completed.
///
/// The callback is deferred by one task so the navigation entry has its
/// `loadEventEnd` filled in.
pub fn on_page_loaded(callback: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let deferred = move || Timeout::new(0, callback).forget();

    let complete = win
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        deferred();
        return;
    }

    let listener = Closure::once_into_js(deferred);
    if let Err(e) = win.add_event_listener_with_callback("load", listener.unchecked_ref()) {
        console_warn!("Failed to listen for page load: {:?}", e);
    }
}
