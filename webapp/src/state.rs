use std::collections::HashSet;

use dioxus::prelude::*;

use common::{modal::ModalState, theme::Theme, tour::Tour};

use crate::common::theme;

// AppContext
//
// the page's shared state, constructed once at startup and reached through
// the component context rather than a global.  everything else (menu open,
// accordion expansion, filter selection) stays local to its component.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current color scheme; an effect mirrors it onto the document root.
    pub theme: Signal<Theme>,
    /// Last observed vertical scroll offset.
    pub scroll_y: Signal<f64>,
    /// Section ids the fade-in observer has seen.  Insert-only.
    pub visible_sections: Signal<HashSet<String>>,
    /// Section currently owning the nav highlight.
    pub active_section: Signal<Option<String>>,
    /// Tour detail overlay lifecycle.
    pub modal: Signal<ModalState<Tour>>,
}

impl AppContext {
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            theme: Signal::new(theme::initial()),
            scroll_y: Signal::new(0.0),
            visible_sections: Signal::new(HashSet::new()),
            active_section: Signal::new(None),
            modal: Signal::new(ModalState::Closed),
        })
    }
}

pub fn use_app_context() -> AppContext {
    use_context()
}
