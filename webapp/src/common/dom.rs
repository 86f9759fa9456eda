// thin web-sys layer for the handful of document-level operations the
// components need.  helpers degrade to a no-op (or an error the caller
// logs) when the expected browser surface is missing.

use anyhow::Result;

use dioxus::prelude::*;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use web_sys::{
    AddEventListenerOptions, Document, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions,
};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn media_query_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Keep a signal in sync with the window's vertical scroll offset through a
/// passive listener.
pub fn track_scroll(mut scroll_y: Signal<f64>) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no window"))?;

    let closure = Closure::wrap(Box::new(move || {
        scroll_y.set(scroll_offset());
    }) as Box<dyn FnMut()>);

    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|_| anyhow::Error::msg("failed to attach the scroll listener"))?;

    // page-lifetime listener
    closure.forget();

    Ok(())
}

/// Document-level keydown hook, alive for the page lifetime.
pub fn on_document_keydown(handler: impl FnMut(KeyboardEvent) + 'static) -> Result<()> {
    let document = document().ok_or_else(|| anyhow::Error::msg("no document"))?;

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);

    document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|_| anyhow::Error::msg("failed to attach the keydown listener"))?;

    closure.forget();

    Ok(())
}

/// Freeze or release body scrolling.  Open overlays and the mobile menu
/// hold the lock while they are up.
pub fn lock_body_scroll(lock: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    let style = body.style();
    let result = if lock {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };

    if result.is_err() {
        tracing::warn!("failed to update the body scroll lock");
    }
}

pub fn smooth_scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Full content height of an element, for the accordion's max-height
/// transition.
pub fn scroll_height(id: &str) -> Option<i32> {
    Some(document()?.get_element_by_id(id)?.scroll_height())
}

/// Layout size of an element, for the parallax rotation math.
pub fn element_size(id: &str) -> Option<(f64, f64)> {
    let element: HtmlElement = document()?.get_element_by_id(id)?.dyn_into().ok()?;

    Some((element.offset_width() as f64, element.offset_height() as f64))
}
