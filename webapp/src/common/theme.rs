use common::theme::Theme;

use crate::common::{dom, storage};

const THEME_KEY: &str = "theme";

/// Persisted choice, else the OS preference, else light.
pub fn initial() -> Theme {
    if let Ok(saved) = storage::get_local_storage::<Theme>(THEME_KEY) {
        return saved;
    }

    if dom::media_query_matches("(prefers-color-scheme: dark)") {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Mirror the scheme onto the document root and persist the choice.  The
/// style layer keys its dark palette off the data-theme attribute.
pub fn apply(theme: Theme) {
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        if root.set_attribute("data-theme", theme.as_str()).is_err() {
            tracing::warn!("failed to set the document theme attribute");
        }
    }

    storage::set_local_storage(THEME_KEY, theme);
}
