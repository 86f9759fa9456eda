// viewport intersection wiring for the fade-in and nav-highlight behaviors
//
// entries are handled in delivery order, so when several sections cross the
// highlight band in one batch the last entry delivered keeps the highlight.
// the observation API leaves batch order unspecified; this is an accepted
// approximation rather than something to correct.

use std::collections::HashSet;

use anyhow::Result;

use dioxus::prelude::*;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::common::dom;
use crate::content;

/// Fraction of a section that must be visible before it fades in.
const FADE_THRESHOLD: f64 = 0.1;

/// Shrinks the highlight viewport to its middle 40% vertical band.
const HIGHLIGHT_ROOT_MARGIN: &str = "-30% 0px -70% 0px";

pub fn wire_fade_in(mut visible: Signal<HashSet<String>>) -> Result<()> {
    observe_by_id(
        content::FADE_SECTION_IDS,
        move |id| {
            // insert-only: sections never fade back out
            visible.with_mut(|set| {
                set.insert(id);
            });
        },
        Some(FADE_THRESHOLD),
        None,
    )
}

pub fn wire_nav_highlight(mut active: Signal<Option<String>>) -> Result<()> {
    let ids: Vec<&str> = content::NAV_SECTIONS.iter().map(|(id, _)| *id).collect();

    observe_by_id(
        &ids,
        move |id| active.set(Some(id)),
        None,
        Some(HIGHLIGHT_ROOT_MARGIN),
    )
}

fn observe_by_id(
    ids: &[&str],
    mut on_enter: impl FnMut(String) + 'static,
    threshold: Option<f64>,
    root_margin: Option<&str>,
) -> Result<()> {
    let document = dom::document().ok_or_else(|| anyhow::Error::msg("no document"))?;

    let options = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let callback = Closure::wrap(Box::new(move |entries: Vec<JsValue>| {
        for entry in entries {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_enter(entry.target().id());
            }
        }
    }) as Box<dyn FnMut(Vec<JsValue>)>);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| anyhow::Error::msg("failed to construct the intersection observer"))?;

    for id in ids {
        match document.get_element_by_id(id) {
            Some(element) => observer.observe(&element),
            None => tracing::warn!("cannot observe missing section #{id}"),
        }
    }

    // both the callback and the observer live as long as the page
    callback.forget();
    std::mem::forget(observer);

    Ok(())
}
