//! Panel tree structure for split layouts
//!
//! This module provides the binary tree used to represent the spatial
//! arrangement of tab groups. Each node is either a leaf panel (holding an
//! ordered set of tabs) or a split node (holding exactly two children).
//!
//! # Tree Structure
//!
//! ```text
//! Split(Horizontal, 0.5)
//! ├── Leaf(L0, [a.ts*])
//! └── Split(Vertical, 0.5)
//!     ├── Leaf(L1, [b.ts*, c.ts])
//!     └── Leaf(L2, [])
//! ```
//!
//! Children are owned exclusively by their parent split, so every
//! traversal below is a plain recursive function over the enum. All
//! searches are pre-order with `first` visited before `second`.

use serde::Serialize;

use super::types::{Orientation, PanelId, TabId};

/// Default split ratio (50% of available space).
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Minimum valid split ratio.
pub const MIN_SPLIT_RATIO: f64 = 0.0;

/// Maximum valid split ratio.
pub const MAX_SPLIT_RATIO: f64 = 1.0;

/// A node in the panel tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelNode {
    /// A leaf panel holding tabs.
    Leaf(LeafPanel),
    /// A split containing two child nodes.
    Split(SplitNode),
}

/// A leaf panel in the tree.
///
/// `tab_ids` never contains duplicates and `active_tab`, when set, is
/// always one of `tab_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafPanel {
    /// Unique identifier for this panel.
    pub id: PanelId,
    /// Tabs shown in this panel, in insertion order.
    tab_ids: Vec<TabId>,
    /// Tab focused within this panel.
    active_tab: Option<TabId>,
}

/// A split node containing two children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitNode {
    /// Unique identifier for this split.
    pub id: PanelId,
    /// Axis along which the children are arranged.
    pub orientation: Orientation,
    /// First child (left for horizontal, top for vertical).
    pub first: Box<PanelNode>,
    /// Second child (right for horizontal, bottom for vertical).
    pub second: Box<PanelNode>,
    /// Proportion of space allocated to the first child (0.0 to 1.0).
    pub ratio: f64,
}

impl LeafPanel {
    /// Creates a new empty leaf panel with a unique ID.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(PanelId::new())
    }

    /// Creates a new empty leaf panel with the given ID.
    #[must_use]
    pub const fn with_id(id: PanelId) -> Self {
        Self {
            id,
            tab_ids: Vec::new(),
            active_tab: None,
        }
    }

    /// Creates a new leaf panel holding a single, active tab.
    #[must_use]
    pub fn with_tab(tab: TabId) -> Self {
        Self {
            id: PanelId::new(),
            tab_ids: vec![tab],
            active_tab: Some(tab),
        }
    }

    /// Returns the tabs in this panel, in order.
    #[must_use]
    pub fn tab_ids(&self) -> &[TabId] {
        &self.tab_ids
    }

    /// Returns the tab focused within this panel.
    #[must_use]
    pub const fn active_tab(&self) -> Option<TabId> {
        self.active_tab
    }

    /// Returns true if this panel holds no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tab_ids.is_empty()
    }

    /// Returns true if this panel holds the given tab.
    #[must_use]
    pub fn contains(&self, tab: TabId) -> bool {
        self.tab_ids.contains(&tab)
    }

    /// Appends a tab and makes it the panel's active tab.
    ///
    /// A tab already present is only activated, never duplicated.
    /// Returns true if the tab was appended.
    pub fn push_tab(&mut self, tab: TabId) -> bool {
        let appended = if self.contains(tab) {
            false
        } else {
            self.tab_ids.push(tab);
            true
        };
        self.active_tab = Some(tab);
        appended
    }

    /// Removes a tab from this panel.
    ///
    /// If the removed tab was active, the last remaining tab becomes
    /// active, or none when the panel is now empty.
    /// Returns true if the tab was present.
    pub fn remove_tab(&mut self, tab: TabId) -> bool {
        let Some(pos) = self.tab_ids.iter().position(|&t| t == tab) else {
            return false;
        };
        self.tab_ids.remove(pos);
        if self.active_tab == Some(tab) {
            self.active_tab = self.tab_ids.last().copied();
        }
        true
    }

    /// Makes `tab` the active tab if this panel holds it.
    pub fn activate(&mut self, tab: TabId) -> bool {
        if self.contains(tab) {
            self.active_tab = Some(tab);
            true
        } else {
            false
        }
    }
}

impl Default for LeafPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitNode {
    /// Creates a new split node using the default ratio (0.5).
    #[must_use]
    pub fn new(orientation: Orientation, first: PanelNode, second: PanelNode) -> Self {
        Self {
            id: PanelId::new(),
            orientation,
            first: Box::new(first),
            second: Box::new(second),
            ratio: DEFAULT_SPLIT_RATIO,
        }
    }

    /// Creates a new split node with a custom ratio.
    ///
    /// # Panics
    ///
    /// Panics if ratio is not in the range [0.0, 1.0].
    #[must_use]
    pub fn with_ratio(
        orientation: Orientation,
        first: PanelNode,
        second: PanelNode,
        ratio: f64,
    ) -> Self {
        assert!(
            (MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&ratio),
            "Split ratio must be between {MIN_SPLIT_RATIO} and {MAX_SPLIT_RATIO}"
        );
        Self {
            ratio,
            ..Self::new(orientation, first, second)
        }
    }
}

impl PanelNode {
    /// Creates a new leaf node with an empty panel.
    #[must_use]
    pub fn new_leaf() -> Self {
        Self::Leaf(LeafPanel::new())
    }

    /// Creates a new split node with the default ratio.
    #[must_use]
    pub fn split(orientation: Orientation, first: Self, second: Self) -> Self {
        Self::Split(SplitNode::new(orientation, first, second))
    }

    /// Returns this node's identifier.
    #[must_use]
    pub const fn id(&self) -> PanelId {
        match self {
            Self::Leaf(leaf) => leaf.id,
            Self::Split(split) => split.id,
        }
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this is a split node.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Returns the leaf panel if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&LeafPanel> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Split(_) => None,
        }
    }

    /// Returns the split node if this is a split node.
    #[must_use]
    pub const fn as_split(&self) -> Option<&SplitNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => Some(split),
        }
    }

    /// Returns a mutable reference to the split node if this is a split node.
    #[must_use]
    pub fn as_split_mut(&mut self) -> Option<&mut SplitNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => Some(split),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the first leaf in pre-order (leftmost/topmost).
    ///
    /// This is where newly opened tabs land.
    #[must_use]
    pub fn find_first_leaf(&self) -> &LeafPanel {
        match self {
            Self::Leaf(leaf) => leaf,
            Self::Split(split) => split.first.find_first_leaf(),
        }
    }

    /// Returns a mutable reference to the first leaf in pre-order.
    #[must_use]
    pub fn find_first_leaf_mut(&mut self) -> &mut LeafPanel {
        match self {
            Self::Leaf(leaf) => leaf,
            Self::Split(split) => split.first.find_first_leaf_mut(),
        }
    }

    /// Finds any node (leaf or split) by its ID.
    #[must_use]
    pub fn find_panel_by_id(&self, id: PanelId) -> Option<&Self> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => split
                .first
                .find_panel_by_id(id)
                .or_else(|| split.second.find_panel_by_id(id)),
        }
    }

    /// Finds the leaf holding the given tab.
    #[must_use]
    pub fn find_leaf_containing(&self, tab: TabId) -> Option<&LeafPanel> {
        match self {
            Self::Leaf(leaf) => leaf.contains(tab).then_some(leaf),
            Self::Split(split) => split
                .first
                .find_leaf_containing(tab)
                .or_else(|| split.second.find_leaf_containing(tab)),
        }
    }

    /// Returns true if the tree contains a node with the given ID.
    #[must_use]
    pub fn contains_panel(&self, id: PanelId) -> bool {
        self.find_panel_by_id(id).is_some()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Activates `tab` within the first leaf that holds it.
    ///
    /// Returns true if a leaf holding the tab was found.
    pub fn activate_in_panel(&mut self, tab: TabId) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.activate(tab),
            Self::Split(split) => {
                split.first.activate_in_panel(tab) || split.second.activate_in_panel(tab)
            }
        }
    }

    /// Removes `tab` from every leaf that holds it.
    ///
    /// Both subtrees of every split are visited, even after a match.
    /// Returns true if the tab was removed anywhere.
    pub fn remove_tab_from_panel(&mut self, tab: TabId) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.remove_tab(tab),
            Self::Split(split) => {
                split.first.remove_tab_from_panel(tab) | split.second.remove_tab_from_panel(tab)
            }
        }
    }

    /// Replaces the node with the given ID by `new_node`.
    ///
    /// Only children of split nodes are matched; a caller owning the root
    /// handles the root itself. Returns true if a replacement occurred.
    pub fn replace_panel_by_id(&mut self, id: PanelId, new_node: Self) -> bool {
        self.replace_child(id, new_node).is_ok()
    }

    /// Recursive worker for [`Self::replace_panel_by_id`]. Hands the node
    /// back when no child matched so the search can continue elsewhere.
    fn replace_child(&mut self, id: PanelId, new_node: Self) -> Result<(), Self> {
        let Self::Split(split) = self else {
            return Err(new_node);
        };
        if split.first.id() == id {
            *split.first = new_node;
            return Ok(());
        }
        if split.second.id() == id {
            *split.second = new_node;
            return Ok(());
        }
        let new_node = match split.first.replace_child(id, new_node) {
            Ok(()) => return Ok(()),
            Err(node) => node,
        };
        split.second.replace_child(id, new_node)
    }

    /// Updates the ratio of the split with the given ID.
    ///
    /// The ratio is clamped to [0.0, 1.0]; NaN and infinities are rejected.
    /// Returns true if the split was found and updated.
    pub fn set_split_ratio(&mut self, id: PanelId, ratio: f64) -> bool {
        if !ratio.is_finite() {
            return false;
        }
        let clamped = ratio.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO);
        match self {
            Self::Leaf(_) => false,
            Self::Split(split) => {
                if split.id == id {
                    split.ratio = clamped;
                    true
                } else {
                    split.first.set_split_ratio(id, clamped)
                        || split.second.set_split_ratio(id, clamped)
                }
            }
        }
    }

    /// Collapses splits that have an empty leaf child by promoting the
    /// sibling in place of the split.
    ///
    /// A lone leaf is never removed, so the tree keeps at least one leaf.
    /// Returns the number of empty leaves dropped.
    pub fn prune_empty_leaves(&mut self) -> usize {
        let Self::Split(split) = self else {
            return 0;
        };
        let mut pruned = split.first.prune_empty_leaves() + split.second.prune_empty_leaves();

        let first_empty = split.first.as_leaf().is_some_and(LeafPanel::is_empty);
        let second_empty = split.second.as_leaf().is_some_and(LeafPanel::is_empty);
        let survivor = if first_empty {
            Some(std::mem::replace(split.second.as_mut(), Self::new_leaf()))
        } else if second_empty {
            Some(std::mem::replace(split.first.as_mut(), Self::new_leaf()))
        } else {
            None
        };
        if let Some(survivor) = survivor {
            *self = survivor;
            pruned += 1;
        }
        pruned
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns all leaves in pre-order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&LeafPanel> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a LeafPanel>) {
        match self {
            Self::Leaf(leaf) => out.push(leaf),
            Self::Split(split) => {
                split.first.collect_leaves(out);
                split.second.collect_leaves(out);
            }
        }
    }

    /// Returns the IDs of all leaves in pre-order.
    #[must_use]
    pub fn leaf_ids(&self) -> Vec<PanelId> {
        self.leaves().into_iter().map(|leaf| leaf.id).collect()
    }

    /// Returns the IDs of every node (splits included) in pre-order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<PanelId> {
        let mut ids = Vec::new();
        self.collect_node_ids(&mut ids);
        ids
    }

    fn collect_node_ids(&self, ids: &mut Vec<PanelId>) {
        ids.push(self.id());
        if let Self::Split(split) = self {
            split.first.collect_node_ids(ids);
            split.second.collect_node_ids(ids);
        }
    }

    /// Returns every tab reference held by any leaf, in pre-order.
    #[must_use]
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.leaves()
            .into_iter()
            .flat_map(|leaf| leaf.tab_ids().iter().copied())
            .collect()
    }

    /// Returns the total number of leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Split(split) => split.first.leaf_count() + split.second.leaf_count(),
        }
    }

    /// Returns the depth of the tree.
    ///
    /// A single leaf has depth 0. Each level of splits adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Split(split) => 1 + split.first.depth().max(split.second.depth()),
        }
    }
}

impl Default for PanelNode {
    fn default() -> Self {
        Self::new_leaf()
    }
}
