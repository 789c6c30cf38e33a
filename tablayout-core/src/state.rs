//! Application state container
//!
//! [`AppState`] is created once by the application root and owns every piece
//! of session state. Nothing here is global, so tests build as many isolated
//! instances as they need.

use crate::chrome::ChromeStore;
use crate::config::LayoutSettings;
use crate::layout::LayoutStore;

/// Session state: the panel layout and the surrounding chrome.
#[derive(Debug, Default)]
pub struct AppState {
    /// Tabs and panel tree
    pub layout: LayoutStore,
    /// Drawer, modal and routed-view flags
    pub chrome: ChromeStore,
}

impl AppState {
    /// Creates the session state: one empty leaf, no tabs, all chrome closed.
    #[must_use]
    pub fn new(settings: &LayoutSettings) -> Self {
        tracing::debug!(
            prune_empty_leaves = settings.prune_empty_leaves,
            split_ratio = settings.default_split_ratio,
            "Creating application state"
        );
        Self {
            layout: LayoutStore::with_settings(settings),
            chrome: ChromeStore::new(),
        }
    }
}
