//! `TabLayout` Core Library
//!
//! This crate manages an editor-style workspace layout: a resizable,
//! splittable arrangement of tab groups plus independently toggled drawers
//! and modals.
//!
//! # Crate Structure
//!
//! - [`layout`] - Tab registry, panel tree and the `LayoutStore` operations
//! - [`chrome`] - Drawer, modal and routed-view visibility flags
//! - [`state`] - `AppState`, the session state container
//! - [`config`] - `LayoutSettings` loaded from TOML
//! - [`error`] - Error types
//! - [`tracing`] - Subscriber setup and operation spans

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod chrome;
pub mod config;
pub mod error;
pub mod layout;
pub mod state;
pub mod tracing;

pub use chrome::{ChromeState, ChromeStore, Drawer, Modal};
pub use config::LayoutSettings;
pub use error::{
    ConfigError, ConfigResult, LayoutError, LayoutResult, TabLayoutError, TabLayoutResult,
};
pub use layout::{
    Direction, LayoutStore, LeafPanel, OpenOutcome, Orientation, PanelId, PanelNode, SplitNode,
    Tab, TabId, TabKind, TabRegistry,
};
pub use state::AppState;
pub use self::tracing::{TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing};
