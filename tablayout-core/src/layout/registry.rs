//! Tab registry
//!
//! The authoritative, ordered list of open tabs plus the globally active tab
//! (the one with input focus, whichever leaf it lives in).

use serde::Serialize;

use super::types::{Tab, TabId, TabKind};

/// Ordered collection of open tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<TabId>,
}

impl TabRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all tabs in the order they were opened.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Returns the globally active tab.
    #[must_use]
    pub const fn active(&self) -> Option<TabId> {
        self.active
    }

    /// Returns the number of open tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns true if no tab is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Iterates over the tabs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }

    /// Looks up a tab by ID.
    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    /// Returns true if the tab is registered.
    #[must_use]
    pub fn contains(&self, id: TabId) -> bool {
        self.get(id).is_some()
    }

    /// Finds the editor tab for a file name.
    #[must_use]
    pub fn find_editor(&self, file_name: &str) -> Option<&Tab> {
        self.tabs
            .iter()
            .find(|tab| tab.kind() == TabKind::Editor && tab.title() == file_name)
    }

    /// Finds the graph tab, if one is open.
    #[must_use]
    pub fn find_graph(&self) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.kind() == TabKind::Graph)
    }

    /// Returns the number of tabs of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: TabKind) -> usize {
        self.tabs.iter().filter(|tab| tab.kind() == kind).count()
    }

    /// Appends a tab. The caller decides whether it becomes active.
    pub fn push(&mut self, tab: Tab) {
        self.tabs.push(tab);
    }

    /// Removes a tab.
    ///
    /// If it was the globally active tab, the last remaining tab becomes
    /// active, or none when the registry is now empty.
    pub fn remove(&mut self, id: TabId) -> Option<Tab> {
        let pos = self.tabs.iter().position(|tab| tab.id() == id)?;
        let removed = self.tabs.remove(pos);
        if self.active == Some(id) {
            self.active = self.tabs.last().map(Tab::id);
        }
        Some(removed)
    }

    /// Sets the globally active tab if it is registered.
    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.contains(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }
}

impl<'a> IntoIterator for &'a TabRegistry {
    type Item = &'a Tab;
    type IntoIter = std::slice::Iter<'a, Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
