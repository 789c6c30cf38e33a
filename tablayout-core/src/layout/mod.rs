//! Panel and tab layout engine
//!
//! This module provides the editor-style workspace layout: a binary tree of
//! splits whose leaves each hold an ordered group of tabs, plus the registry
//! of every open tab.
//!
//! # Architecture
//!
//! - **Tab registry**: flat ordered list of open tabs and the globally active tab
//! - **Panel tree**: splits and leaves; each leaf tracks its own active tab
//! - **Store**: applies open/close/activate/split to both and publishes snapshots
//!
//! # Module Structure
//!
//! - `types` - Identifiers and enums (`TabId`, `PanelId`, `TabKind`, `Direction`)
//! - `tree` - Panel tree structure (`PanelNode`, `LeafPanel`, `SplitNode`)
//! - `registry` - Ordered tab list (`TabRegistry`)
//! - `store` - Orchestration and change notification (`LayoutStore`)
//!
//! # Invariants
//!
//! After every operation:
//! - every registered tab sits in exactly one leaf, and leaves hold only
//!   registered tabs
//! - a leaf's active tab is one of its own tabs
//! - split ratios lie in [0.0, 1.0]
//! - node IDs are pairwise distinct and the tree has at least one leaf
//! - at most one graph tab is open

mod registry;
mod store;
mod tree;
mod types;

pub use registry::TabRegistry;
pub use store::{LayoutStore, OpenOutcome};
pub use tree::{
    DEFAULT_SPLIT_RATIO, LeafPanel, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, PanelNode, SplitNode,
};
pub use types::{Direction, Orientation, PanelId, Tab, TabId, TabKind};
