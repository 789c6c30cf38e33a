//! Layout store
//!
//! [`LayoutStore`] owns the tab registry and the panel tree and applies the
//! public operations (open, close, activate, split) to both together. After
//! each operation the new registry and tree are published on `watch`
//! channels, so views always observe a consistent pair.
//!
//! # Example
//!
//! ```
//! use tablayout_core::layout::{Direction, LayoutStore, Orientation};
//!
//! let mut store = LayoutStore::new();
//! let leaf = store.root().id();
//!
//! let a = store.open_editor_tab("a.ts").tab_id();
//! let b = store.open_editor_tab("b.ts").tab_id();
//! assert_eq!(store.registry().active(), Some(b));
//!
//! assert!(store.split_panel(leaf, b, Direction::Right));
//! let split = store.root().as_split().unwrap();
//! assert_eq!(split.orientation, Orientation::Horizontal);
//! assert_eq!(split.first.find_first_leaf().tab_ids(), &[a]);
//! assert_eq!(split.second.find_first_leaf().tab_ids(), &[b]);
//! ```

use std::collections::HashSet;

use tokio::sync::watch;

use super::registry::TabRegistry;
use super::tree::{LeafPanel, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, PanelNode, SplitNode};
use super::types::{Direction, PanelId, Tab, TabId, TabKind};
use crate::config::LayoutSettings;
use crate::error::{LayoutError, LayoutResult};
use crate::tracing::span_names;

/// Result of opening an editor or graph tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new tab was created and placed in the first leaf.
    Created(TabId),
    /// An existing tab was activated where it already lives.
    Reused(TabId),
}

impl OpenOutcome {
    /// Returns the created or reused tab.
    #[must_use]
    pub const fn tab_id(&self) -> TabId {
        match self {
            Self::Created(id) | Self::Reused(id) => *id,
        }
    }

    /// Returns true if a new tab was created.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Owns the tab registry and panel tree for one application session.
///
/// Every operation runs to completion synchronously: it reads the current
/// state, computes the new state and publishes it once. Invalid input
/// (unknown tab, unknown panel, splitting a split) leaves the state
/// untouched and is reported only through the returned `bool`.
#[derive(Debug)]
pub struct LayoutStore {
    registry: TabRegistry,
    root: PanelNode,
    graph_tab_title: String,
    split_ratio: f64,
    prune_empty_leaves: bool,
    registry_tx: watch::Sender<TabRegistry>,
    tree_tx: watch::Sender<PanelNode>,
}

impl LayoutStore {
    /// Creates a store with default settings: no tabs, one empty leaf.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&LayoutSettings::default())
    }

    /// Creates a store configured from settings.
    #[must_use]
    pub fn with_settings(settings: &LayoutSettings) -> Self {
        let registry = TabRegistry::new();
        let root = PanelNode::new_leaf();
        let (registry_tx, _) = watch::channel(registry.clone());
        let (tree_tx, _) = watch::channel(root.clone());
        Self {
            registry,
            root,
            graph_tab_title: settings.graph_tab_title.clone(),
            split_ratio: settings
                .default_split_ratio
                .clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO),
            prune_empty_leaves: settings.prune_empty_leaves,
            registry_tx,
            tree_tx,
        }
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Returns the current tab registry.
    #[must_use]
    pub const fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Returns the current root of the panel tree.
    #[must_use]
    pub const fn root(&self) -> &PanelNode {
        &self.root
    }

    /// Returns the globally active tab.
    #[must_use]
    pub const fn active_tab(&self) -> Option<TabId> {
        self.registry.active()
    }

    /// Returns the leaf holding a tab.
    #[must_use]
    pub fn leaf_of(&self, tab: TabId) -> Option<&LeafPanel> {
        self.root.find_leaf_containing(tab)
    }

    /// Subscribes to registry snapshots.
    ///
    /// The receiver sees the current value immediately and is notified
    /// only when an operation actually changes the registry.
    #[must_use]
    pub fn subscribe_registry(&self) -> watch::Receiver<TabRegistry> {
        self.registry_tx.subscribe()
    }

    /// Subscribes to panel tree snapshots.
    #[must_use]
    pub fn subscribe_tree(&self) -> watch::Receiver<PanelNode> {
        self.tree_tx.subscribe()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Opens the editor tab for `file_name`, or activates it if already open.
    ///
    /// A new tab is appended to the first leaf in pre-order and becomes
    /// active both there and globally. Never fails.
    pub fn open_editor_tab(&mut self, file_name: &str) -> OpenOutcome {
        let _span = crate::trace_operation_debug!(
            span_names::OPEN_EDITOR_TAB,
            file_name = %file_name
        )
        .entered();

        let outcome = match self.registry.find_editor(file_name).map(Tab::id) {
            Some(id) => self.reuse(id),
            None => self.attach_new(Tab::new(file_name, TabKind::Editor)),
        };
        self.commit();
        outcome
    }

    /// Opens the graph tab, or activates it if already open.
    ///
    /// At most one graph tab exists at any time. Never fails.
    pub fn open_graph_tab(&mut self) -> OpenOutcome {
        let _span = crate::trace_operation_debug!(span_names::OPEN_GRAPH_TAB).entered();

        let outcome = match self.registry.find_graph().map(Tab::id) {
            Some(id) => self.reuse(id),
            None => {
                let tab = Tab::new(self.graph_tab_title.clone(), TabKind::Graph);
                self.attach_new(tab)
            }
        };
        self.commit();
        outcome
    }

    /// Closes a tab.
    ///
    /// The tab leaves the registry and its leaf. Active tabs (the leaf's
    /// and the global one) fall back to the last remaining entry. The
    /// emptied leaf stays in the tree unless pruning is enabled in the
    /// settings. Returns false if the tab is unknown.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let _span =
            crate::trace_operation_debug!(span_names::CLOSE_TAB, tab_id = %id).entered();

        let Some(tab) = self.registry.remove(id) else {
            tracing::debug!(tab_id = %id, "Close ignored: unknown tab");
            return false;
        };
        self.root.remove_tab_from_panel(id);
        if self.prune_empty_leaves {
            let pruned = self.root.prune_empty_leaves();
            if pruned > 0 {
                tracing::debug!(pruned, "Pruned empty leaves after close");
            }
        }
        tracing::debug!(
            tab_id = %id,
            title = %tab.title(),
            tab_count = self.registry.len(),
            "Closed tab"
        );
        self.commit();
        true
    }

    /// Makes a tab active globally and within its leaf.
    ///
    /// Membership is unchanged. Returns false if the tab is unknown.
    pub fn set_active_tab(&mut self, id: TabId) -> bool {
        let _span =
            crate::trace_operation_debug!(span_names::SET_ACTIVE_TAB, tab_id = %id).entered();

        if !self.registry.set_active(id) {
            tracing::debug!(tab_id = %id, "Activate ignored: unknown tab");
            return false;
        }
        self.root.activate_in_panel(id);
        self.commit();
        true
    }

    /// Splits a leaf, moving `tab_id` into a new leaf at `direction`.
    ///
    /// Returns false (and changes nothing) when the panel is missing, is a
    /// split, or the tab is not registered. See [`Self::try_split_panel`]
    /// for the reason.
    pub fn split_panel(&mut self, panel_id: PanelId, tab_id: TabId, direction: Direction) -> bool {
        match self.try_split_panel(panel_id, tab_id, direction) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "Split ignored");
                false
            }
        }
    }

    /// Splits a leaf, moving `tab_id` into a new leaf at `direction`.
    ///
    /// The leaf is replaced in place by a split whose children are the new
    /// leaf (holding only `tab_id`, active) and the original leaf, ordered
    /// by `direction`. `tab_id` is first detached from whichever leaf held
    /// it, so a tab is never referenced twice. The global active tab does
    /// not change.
    ///
    /// # Returns
    ///
    /// The ID of the new leaf.
    ///
    /// # Errors
    ///
    /// - `LayoutError::PanelNotFound` if no node has `panel_id`
    /// - `LayoutError::NotALeaf` if `panel_id` names a split
    /// - `LayoutError::TabNotFound` if `tab_id` is not registered
    pub fn try_split_panel(
        &mut self,
        panel_id: PanelId,
        tab_id: TabId,
        direction: Direction,
    ) -> LayoutResult<PanelId> {
        let _span = crate::trace_operation_debug!(
            span_names::SPLIT_PANEL,
            panel_id = %panel_id,
            tab_id = %tab_id,
            direction = %direction
        )
        .entered();

        let mut original = match self.root.find_panel_by_id(panel_id) {
            None => return Err(LayoutError::PanelNotFound(panel_id)),
            Some(PanelNode::Split(_)) => return Err(LayoutError::NotALeaf(panel_id)),
            Some(PanelNode::Leaf(leaf)) => leaf.clone(),
        };
        if !self.registry.contains(tab_id) {
            return Err(LayoutError::TabNotFound(tab_id));
        }

        original.remove_tab(tab_id);
        self.root.remove_tab_from_panel(tab_id);

        let new_leaf = LeafPanel::with_tab(tab_id);
        let new_leaf_id = new_leaf.id;
        let (first, second) = if direction.places_new_first() {
            (PanelNode::Leaf(new_leaf), PanelNode::Leaf(original))
        } else {
            (PanelNode::Leaf(original), PanelNode::Leaf(new_leaf))
        };
        let split = PanelNode::Split(SplitNode::with_ratio(
            direction.orientation(),
            first,
            second,
            self.split_ratio,
        ));

        if self.root.id() == panel_id {
            self.root = split;
        } else {
            self.root.replace_panel_by_id(panel_id, split);
        }

        tracing::debug!(
            new_panel_id = %new_leaf_id,
            leaf_count = self.root.leaf_count(),
            "Split panel"
        );
        self.commit();
        Ok(new_leaf_id)
    }

    /// Sets the ratio of a split node, clamped to [0.0, 1.0].
    ///
    /// Returns false (and changes nothing) if no split has that ID or the
    /// ratio is NaN or infinite.
    pub fn set_split_ratio(&mut self, split_id: PanelId, ratio: f64) -> bool {
        let _span = crate::trace_operation_debug!(
            span_names::SET_SPLIT_RATIO,
            panel_id = %split_id,
            ratio
        )
        .entered();

        if !self.root.set_split_ratio(split_id, ratio) {
            tracing::debug!("Resize ignored: unknown split or non-finite ratio");
            return false;
        }
        self.commit();
        true
    }

    /// Removes empty leaves by promoting their siblings.
    ///
    /// Returns the number of leaves removed. The last leaf always stays.
    pub fn collapse_empty_leaves(&mut self) -> usize {
        let _span = crate::trace_operation_debug!(span_names::COLLAPSE_EMPTY_LEAVES).entered();

        let pruned = self.root.prune_empty_leaves();
        if pruned > 0 {
            tracing::debug!(pruned, "Collapsed empty leaves");
            self.commit();
        }
        pruned
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Verifies the structural invariants of the registry and tree.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvariantViolation` describing the first
    /// broken invariant.
    pub fn check_invariants(&self) -> LayoutResult<()> {
        let violation = |msg: String| Err(LayoutError::InvariantViolation(msg));

        // Tabs are partitioned across leaves.
        let mut placed = HashSet::new();
        for tab in self.root.tab_ids() {
            if !placed.insert(tab) {
                return violation(format!("{tab} is held by more than one leaf"));
            }
            if !self.registry.contains(tab) {
                return violation(format!("{tab} is in a leaf but not in the registry"));
            }
        }
        if let Some(orphan) = self.registry.iter().find(|t| !placed.contains(&t.id())) {
            return violation(format!("{} is registered but in no leaf", orphan.id()));
        }

        for leaf in self.root.leaves() {
            if let Some(active) = leaf.active_tab() {
                if !leaf.contains(active) {
                    return violation(format!("{} has foreign active tab {active}", leaf.id));
                }
            }
        }

        check_ratios(&self.root)?;

        let mut seen = HashSet::new();
        if let Some(dup) = self.root.node_ids().into_iter().find(|id| !seen.insert(*id)) {
            return violation(format!("{dup} appears twice in the tree"));
        }

        if self.root.leaf_count() == 0 {
            return violation("tree has no leaf".to_string());
        }

        let graphs = self.registry.count_kind(TabKind::Graph);
        if graphs > 1 {
            return violation(format!("{graphs} graph tabs are open"));
        }

        if let Some(active) = self.registry.active() {
            if !self.registry.contains(active) {
                return violation(format!("global active {active} is not registered"));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Private Helper Methods
    // ========================================================================

    fn reuse(&mut self, id: TabId) -> OpenOutcome {
        self.registry.set_active(id);
        self.root.activate_in_panel(id);
        tracing::debug!(tab_id = %id, "Reused existing tab");
        OpenOutcome::Reused(id)
    }

    fn attach_new(&mut self, tab: Tab) -> OpenOutcome {
        let id = tab.id();
        let kind = tab.kind();
        self.registry.push(tab);
        let leaf = self.root.find_first_leaf_mut();
        leaf.push_tab(id);
        let leaf_id = leaf.id;
        self.registry.set_active(id);
        tracing::debug!(
            tab_id = %id,
            panel_id = %leaf_id,
            kind = %kind,
            "Created tab"
        );
        OpenOutcome::Created(id)
    }

    /// Checks invariants in debug builds, then publishes the new state.
    fn commit(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.check_invariants() {
                panic!("{err}");
            }
        }
        self.publish();
    }

    fn publish(&self) {
        let registry = &self.registry;
        self.registry_tx.send_if_modified(|current| {
            if current == registry {
                false
            } else {
                current.clone_from(registry);
                true
            }
        });
        let root = &self.root;
        self.tree_tx.send_if_modified(|current| {
            if current == root {
                false
            } else {
                current.clone_from(root);
                true
            }
        });
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

fn check_ratios(node: &PanelNode) -> LayoutResult<()> {
    if let PanelNode::Split(split) = node {
        if !(MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&split.ratio) {
            return Err(LayoutError::InvariantViolation(format!(
                "{} has ratio {}",
                split.id, split.ratio
            )));
        }
        check_ratios(&split.first)?;
        check_ratios(&split.second)?;
    }
    Ok(())
}
