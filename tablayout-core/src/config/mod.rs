//! Configuration for `TabLayout`
//!
//! This module provides [`LayoutSettings`], loaded from and saved to a TOML
//! file in the platform configuration directory.

pub mod settings;

pub use settings::{
    APP_DIR_NAME, DEFAULT_GRAPH_TAB_TITLE, LayoutSettings, LoggingSettings, SETTINGS_FILE_NAME,
    default_config_path,
};
