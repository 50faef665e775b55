//! Theme initialization and toggle.
//!
//! Reads the persisted `theme` value (`dark|light`) and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::{self, THEME_KEY};
use crate::state::ui::Theme;

/// Read the stored theme; falls back to the system preference when unset.
pub fn read_preference() -> Theme {
    if let Some(raw) = storage::load_string(THEME_KEY) {
        return Theme::parse(&raw);
    }
    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if prefers_dark {
            return Theme::Dark;
        }
    }
    Theme::Light
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_string(THEME_KEY, next.as_str());
    next
}
