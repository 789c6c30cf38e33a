//! End-to-end session scenarios
//!
//! These drive `AppState` the way an application shell does: open files,
//! split, close, and observe the published snapshots.

use tablayout_core::layout::{Direction, Orientation, PanelNode, TabKind};
use tablayout_core::{AppState, Drawer, LayoutSettings, LayoutStore, Modal};

#[test]
fn split_right_then_close_leaves_empty_leaf() {
    let mut state = AppState::new(&LayoutSettings::default());
    let leaf = state.layout.root().id();

    let a = state.layout.open_editor_tab("a.ts").tab_id();
    let b = state.layout.open_editor_tab("b.ts").tab_id();
    assert_eq!(state.layout.active_tab(), Some(b));
    assert_eq!(state.layout.root().find_first_leaf().tab_ids(), &[a, b]);

    assert!(state.layout.split_panel(leaf, b, Direction::Right));
    {
        let split = state.layout.root().as_split().expect("root should be a split");
        assert_eq!(split.orientation, Orientation::Horizontal);
        assert!((split.ratio - 0.5).abs() < f64::EPSILON);
        let left = split.first.as_leaf().expect("left leaf");
        let right = split.second.as_leaf().expect("right leaf");
        assert_eq!(left.id, leaf);
        assert_eq!(left.tab_ids(), &[a]);
        assert_eq!(left.active_tab(), Some(a));
        assert_eq!(right.tab_ids(), &[b]);
        assert_eq!(right.active_tab(), Some(b));
    }
    assert_eq!(state.layout.active_tab(), Some(b));

    assert!(state.layout.close_tab(a));
    let split = state.layout.root().as_split().expect("split survives close");
    let left = split.first.as_leaf().expect("left leaf");
    assert!(left.is_empty());
    assert_eq!(left.active_tab(), None);
    assert_eq!(split.second.as_leaf().expect("right leaf").tab_ids(), &[b]);
    assert_eq!(state.layout.registry().len(), 1);
    assert_eq!(state.layout.active_tab(), Some(b));
    assert!(state.layout.check_invariants().is_ok());
}

#[test]
fn new_tabs_land_in_first_leaf_after_split() {
    let mut store = LayoutStore::new();
    let leaf = store.root().id();
    let a = store.open_editor_tab("a.ts").tab_id();
    store.split_panel(leaf, a, Direction::Left);

    let c = store.open_editor_tab("c.ts").tab_id();
    let first = store.root().find_first_leaf();
    assert_eq!(first.tab_ids(), &[a, c]);
    assert_eq!(first.active_tab(), Some(c));
    assert_eq!(store.active_tab(), Some(c));
}

#[test]
fn reopening_focuses_tab_in_other_leaf() {
    let mut store = LayoutStore::new();
    let leaf = store.root().id();
    let a = store.open_editor_tab("a.ts").tab_id();
    let b = store.open_editor_tab("b.ts").tab_id();
    store.split_panel(leaf, a, Direction::Bottom);
    let tree_before = store.root().clone();

    let outcome = store.open_editor_tab("a.ts");
    assert!(!outcome.is_created());
    assert_eq!(outcome.tab_id(), a);
    assert_eq!(store.active_tab(), Some(a));
    assert_eq!(store.root().tab_ids(), tree_before.tab_ids());
    assert_eq!(store.leaf_of(b).and_then(|l| l.active_tab()), Some(b));
}

#[test]
fn graph_tab_is_a_singleton() {
    let mut state = AppState::default();
    let graph = state.layout.open_graph_tab();
    state.layout.open_editor_tab("notes.md");
    let again = state.layout.open_graph_tab();

    assert!(graph.is_created());
    assert_eq!(again.tab_id(), graph.tab_id());
    assert_eq!(state.layout.registry().count_kind(TabKind::Graph), 1);
    let tab = state.layout.registry().get(graph.tab_id()).expect("graph tab");
    assert_eq!(tab.title(), "Graph View");
    assert_eq!(state.layout.active_tab(), Some(graph.tab_id()));
}

#[test]
fn nested_splits_and_collapse() {
    let settings = LayoutSettings::default();
    let mut store = LayoutStore::with_settings(&settings);
    let root_leaf = store.root().id();
    let a = store.open_editor_tab("a.ts").tab_id();
    let b = store.open_editor_tab("b.ts").tab_id();
    let c = store.open_editor_tab("c.ts").tab_id();

    let right = store
        .try_split_panel(root_leaf, b, Direction::Right)
        .expect("split root leaf");
    let below = store
        .try_split_panel(right, c, Direction::Bottom)
        .expect("split right leaf");
    assert_eq!(store.root().leaf_count(), 3);
    assert_eq!(store.root().depth(), 2);
    assert_eq!(store.leaf_of(c).map(|l| l.id), Some(below));

    // Empty the right column's top leaf, then collapse it away.
    assert!(store.close_tab(b));
    assert_eq!(store.root().leaf_count(), 3);
    assert_eq!(store.collapse_empty_leaves(), 1);
    assert_eq!(store.root().leaf_count(), 2);
    assert_eq!(store.root().tab_ids(), vec![a, c]);
    assert!(store.check_invariants().is_ok());
}

#[test]
fn pruning_setting_collapses_on_close() {
    let settings = LayoutSettings {
        prune_empty_leaves: true,
        ..LayoutSettings::default()
    };
    let mut store = LayoutStore::with_settings(&settings);
    let leaf = store.root().id();
    let a = store.open_editor_tab("a.ts").tab_id();
    let b = store.open_editor_tab("b.ts").tab_id();
    store.split_panel(leaf, b, Direction::Top);

    assert!(store.close_tab(b));
    let remaining = store.root().as_leaf().expect("single leaf after prune");
    assert_eq!(remaining.id, leaf);
    assert_eq!(remaining.tab_ids(), &[a]);
}

#[test]
fn resize_changes_only_the_ratio() {
    let mut store = LayoutStore::new();
    let leaf = store.root().id();
    let a = store.open_editor_tab("a.ts").tab_id();
    store.split_panel(leaf, a, Direction::Right);
    let split_id = store.root().id();

    assert!(store.set_split_ratio(split_id, 0.3));
    let PanelNode::Split(split) = store.root() else {
        panic!("root should be a split");
    };
    assert!((split.ratio - 0.3).abs() < f64::EPSILON);

    assert!(store.set_split_ratio(split_id, 4.0));
    assert!((store.root().as_split().map_or(0.0, |s| s.ratio) - 1.0).abs() < f64::EPSILON);
    assert!(!store.set_split_ratio(leaf, 0.5));
}

#[test]
fn subscribers_see_consistent_snapshots() {
    let mut store = LayoutStore::new();
    let mut registry_rx = store.subscribe_registry();
    let mut tree_rx = store.subscribe_tree();

    let a = store.open_editor_tab("a.ts").tab_id();
    assert!(registry_rx.has_changed().unwrap());
    assert!(tree_rx.has_changed().unwrap());
    let registry = registry_rx.borrow_and_update().clone();
    let tree = tree_rx.borrow_and_update().clone();
    assert!(registry.contains(a));
    assert_eq!(tree.tab_ids(), vec![a]);

    // Invalid split publishes nothing.
    store.split_panel(tree.id(), tablayout_core::TabId::new(), Direction::Left);
    assert!(!registry_rx.has_changed().unwrap());
    assert!(!tree_rx.has_changed().unwrap());
}

#[test]
fn chrome_is_independent_of_layout() {
    let mut state = AppState::default();
    let mut tree_rx = state.layout.subscribe_tree();
    tree_rx.borrow_and_update();

    state.chrome.toggle(Drawer::Terminal);
    state.chrome.show(Modal::Finder);
    state.chrome.set_active_view(Some("settings".to_string()));
    assert!(!tree_rx.has_changed().unwrap());

    state.layout.open_editor_tab("a.ts");
    let chrome = state.chrome.state();
    assert!(chrome.terminal_open);
    assert!(chrome.finder_visible);
    assert_eq!(chrome.active_view.as_deref(), Some("settings"));
}
