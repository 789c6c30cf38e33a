//! Error types for `TabLayout`
//!
//! Layout operations never fail from a caller's point of view: invalid input
//! degrades to a no-op. The errors below name *why* a strict variant refused
//! to act, report broken tree invariants, and cover configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::layout::{PanelId, TabId};

/// Errors describing rejected or inconsistent layout operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// The specified panel was not found in the tree.
    #[error("panel not found: {0}")]
    PanelNotFound(PanelId),

    /// The specified panel is a split, but the operation needs a leaf.
    #[error("panel is not a leaf: {0}")]
    NotALeaf(PanelId),

    /// The specified tab is not in the registry.
    #[error("tab not found: {0}")]
    TabNotFound(TabId),

    /// A split ratio outside [0.0, 1.0].
    #[error("invalid split ratio: {0} (must be between 0.0 and 1.0)")]
    InvalidRatio(f64),

    /// The registry and tree disagree; this is a programming error.
    #[error("layout invariant violated: {0}")]
    InvariantViolation(String),
}

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the settings file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for `LayoutSettings`.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The settings parsed but hold an unusable value.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum TabLayoutError {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for crate-level operations.
pub type TabLayoutResult<T> = Result<T, TabLayoutError>;
