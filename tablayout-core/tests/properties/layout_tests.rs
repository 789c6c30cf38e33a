//! Property-based tests for the layout store
//!
//! Random sequences of open/close/activate/split operations are applied to a
//! fresh `LayoutStore`; after every step the structural invariants must hold.

use std::collections::HashSet;

use proptest::prelude::*;
use tablayout_core::layout::{
    Direction, LayoutStore, LeafPanel, OpenOutcome, PanelNode, TabId, TabKind,
};
use tablayout_core::LayoutSettings;

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for generating split directions
fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Top),
        Just(Direction::Bottom),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

/// Represents an operation that can be performed on a `LayoutStore`
#[derive(Debug, Clone)]
enum LayoutOperation {
    /// Open an editor tab for a file name
    OpenEditor(String),
    /// Open the graph tab
    OpenGraph,
    /// Close a tab (by index into registry order)
    Close { tab_index: usize },
    /// Activate a tab (by index into registry order)
    Activate { tab_index: usize },
    /// Split any node (by pre-order index, so splits are hit too)
    Split {
        node_index: usize,
        tab_index: usize,
        direction: Direction,
    },
    /// Close an id nobody has
    CloseUnknown,
}

/// Strategy for generating layout operations
fn layout_operation_strategy() -> impl Strategy<Value = LayoutOperation> {
    prop_oneof![
        3 => "[a-f]\\.ts".prop_map(LayoutOperation::OpenEditor),
        1 => Just(LayoutOperation::OpenGraph),
        2 => (0usize..16).prop_map(|tab_index| LayoutOperation::Close { tab_index }),
        1 => (0usize..16).prop_map(|tab_index| LayoutOperation::Activate { tab_index }),
        3 => (0usize..16, 0usize..16, direction_strategy()).prop_map(
            |(node_index, tab_index, direction)| LayoutOperation::Split {
                node_index,
                tab_index,
                direction,
            }
        ),
        1 => Just(LayoutOperation::CloseUnknown),
    ]
}

/// Strategy for generating a sequence of layout operations
fn layout_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LayoutOperation>> {
    proptest::collection::vec(layout_operation_strategy(), 0..=max_ops)
}

fn tab_at(store: &LayoutStore, index: usize) -> Option<TabId> {
    let tabs = store.registry().tabs();
    if tabs.is_empty() {
        None
    } else {
        Some(tabs[index % tabs.len()].id())
    }
}

/// Apply an operation to a store (for property testing)
fn apply_operation(store: &mut LayoutStore, op: &LayoutOperation) {
    match op {
        LayoutOperation::OpenEditor(name) => {
            store.open_editor_tab(name);
        }
        LayoutOperation::OpenGraph => {
            store.open_graph_tab();
        }
        LayoutOperation::Close { tab_index } => {
            if let Some(id) = tab_at(store, *tab_index) {
                store.close_tab(id);
            }
        }
        LayoutOperation::Activate { tab_index } => {
            if let Some(id) = tab_at(store, *tab_index) {
                store.set_active_tab(id);
            }
        }
        LayoutOperation::Split {
            node_index,
            tab_index,
            direction,
        } => {
            let nodes = store.root().node_ids();
            let panel = nodes[node_index % nodes.len()];
            if let Some(id) = tab_at(store, *tab_index) {
                store.split_panel(panel, id, *direction);
            }
        }
        LayoutOperation::CloseUnknown => {
            store.close_tab(TabId::new());
        }
    }
}

fn leaf_actives_are_members(root: &PanelNode) -> bool {
    root.leaves()
        .iter()
        .all(|leaf| leaf.active_tab().is_none_or(|active| leaf.contains(active)))
}

fn tabs_partitioned(store: &LayoutStore) -> bool {
    let placed = store.root().tab_ids();
    let unique: HashSet<TabId> = placed.iter().copied().collect();
    let registered: HashSet<TabId> = store.registry().iter().map(|t| t.id()).collect();
    unique.len() == placed.len() && unique == registered
}

// ============================================================================
// Invariant Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every operation sequence keeps all structural invariants.
    #[test]
    fn operations_preserve_invariants(ops in layout_operations_strategy(40)) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
            prop_assert!(store.check_invariants().is_ok(), "{:?} after {:?}", store.check_invariants(), op);
        }
    }

    /// Every registered tab is in exactly one leaf, and leaves hold only registered tabs.
    #[test]
    fn tabs_are_partitioned_across_leaves(ops in layout_operations_strategy(40)) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
            prop_assert!(tabs_partitioned(&store));
        }
    }

    /// A leaf's active tab is always one of its own tabs.
    #[test]
    fn leaf_active_is_member(ops in layout_operations_strategy(40)) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
            prop_assert!(leaf_actives_are_members(store.root()));
        }
    }

    /// At most one graph tab is ever open.
    #[test]
    fn single_graph_instance(ops in layout_operations_strategy(40)) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
            prop_assert!(store.registry().count_kind(TabKind::Graph) <= 1);
        }
    }

    /// The tree never loses its last leaf, even with pruning enabled.
    #[test]
    fn tree_keeps_a_leaf_with_pruning(ops in layout_operations_strategy(40)) {
        let settings = LayoutSettings { prune_empty_leaves: true, ..LayoutSettings::default() };
        let mut store = LayoutStore::with_settings(&settings);
        for op in &ops {
            apply_operation(&mut store, op);
            prop_assert!(store.root().leaf_count() >= 1);
            prop_assert!(store.check_invariants().is_ok());
        }
    }

    /// Node IDs stay pairwise distinct.
    #[test]
    fn node_ids_unique(ops in layout_operations_strategy(40)) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
        }
        let ids = store.root().node_ids();
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }
}

// ============================================================================
// Operation Properties
// ============================================================================

proptest! {
    /// Opening the same file twice yields one editor tab; the second call only activates.
    #[test]
    fn open_editor_is_idempotent(
        ops in layout_operations_strategy(20),
        name in "[a-z]{1,8}\\.rs",
    ) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
        }

        let first = store.open_editor_tab(&name);
        let tabs_before = store.registry().len();
        let tree_before = store.root().tab_ids();
        let second = store.open_editor_tab(&name);

        prop_assert_eq!(second, OpenOutcome::Reused(first.tab_id()));
        prop_assert_eq!(store.registry().len(), tabs_before);
        prop_assert_eq!(store.root().tab_ids(), tree_before);
        prop_assert_eq!(store.active_tab(), Some(first.tab_id()));
        let matching = store
            .registry()
            .iter()
            .filter(|t| t.kind() == TabKind::Editor && t.title() == name)
            .count();
        prop_assert_eq!(matching, 1);
    }

    /// Activating a tab never changes which tabs a leaf holds.
    #[test]
    fn activate_keeps_membership(ops in layout_operations_strategy(30), index in 0usize..16) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
        }
        let Some(id) = tab_at(&store, index) else {
            return Ok(());
        };
        let before = store.root().tab_ids();

        prop_assert!(store.set_active_tab(id));
        prop_assert_eq!(store.root().tab_ids(), before);
        prop_assert_eq!(store.active_tab(), Some(id));
        prop_assert_eq!(store.leaf_of(id).and_then(LeafPanel::active_tab), Some(id));
    }

    /// Closing the active tab falls back to the last remaining registry entry.
    #[test]
    fn close_active_falls_back_to_last(ops in layout_operations_strategy(30)) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
        }
        let Some(active) = store.active_tab() else {
            return Ok(());
        };
        let leaf_id = store.leaf_of(active).map(|leaf| leaf.id);

        prop_assert!(store.close_tab(active));

        let expected = store.registry().tabs().last().map(|t| t.id());
        prop_assert_eq!(store.active_tab(), expected);
        if let Some(leaf) = leaf_id.and_then(|id| store.root().find_panel_by_id(id)).and_then(PanelNode::as_leaf) {
            prop_assert_eq!(leaf.active_tab(), leaf.tab_ids().last().copied());
        }
    }

    /// Splitting a leaf adds exactly one leaf holding only the moved tab.
    #[test]
    fn split_adds_one_leaf(
        ops in layout_operations_strategy(30),
        leaf_index in 0usize..16,
        tab_index in 0usize..16,
        direction in direction_strategy(),
    ) {
        let mut store = LayoutStore::new();
        for op in &ops {
            apply_operation(&mut store, op);
        }
        let Some(tab) = tab_at(&store, tab_index) else {
            return Ok(());
        };
        let leaves = store.root().leaf_ids();
        let target = leaves[leaf_index % leaves.len()];
        let count = store.root().leaf_count();

        let new_leaf = store.try_split_panel(target, tab, direction);
        prop_assert!(new_leaf.is_ok());
        let new_leaf = new_leaf.unwrap();

        prop_assert_eq!(store.root().leaf_count(), count + 1);
        let leaf = store.root().find_panel_by_id(new_leaf).and_then(PanelNode::as_leaf);
        prop_assert!(leaf.is_some());
        let leaf = leaf.unwrap();
        prop_assert_eq!(leaf.tab_ids(), &[tab][..]);
        prop_assert_eq!(leaf.active_tab(), Some(tab));
        prop_assert!(store.root().contains_panel(target));
    }
}
