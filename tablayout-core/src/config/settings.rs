//! Layout settings
//!
//! [`LayoutSettings`] is loaded from a TOML file. Every field has a default,
//! so a missing file or a partial file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::layout::{DEFAULT_SPLIT_RATIO, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO};

/// Title given to the graph tab when it is first opened.
pub const DEFAULT_GRAPH_TAB_TITLE: &str = "Graph View";

/// Settings file name inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Application directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "tablayout";

/// Settings for the panel layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Title for a newly created graph tab.
    pub graph_tab_title: String,
    /// Ratio given to new splits.
    pub default_split_ratio: f64,
    /// Collapse empty leaves after a tab is closed.
    ///
    /// Off by default: emptied leaves stay in the tree until explicitly
    /// pruned.
    pub prune_empty_leaves: bool,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            graph_tab_title: DEFAULT_GRAPH_TAB_TITLE.to_string(),
            default_split_ratio: DEFAULT_SPLIT_RATIO,
            prune_empty_leaves: false,
            logging: LoggingSettings::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level name (error, warn, info, debug, trace).
    pub level: String,
    /// Optional `EnvFilter` directive string overriding `level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Write logs to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            filter: None,
            file: None,
        }
    }
}

impl LayoutSettings {
    /// Parses and validates settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded layout settings");
        Ok(settings)
    }

    /// Loads settings from a file, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is invalid.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Writes settings to a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serializes settings to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&self.default_split_ratio) {
            return Err(ConfigError::Invalid(format!(
                "default_split_ratio {} must be between {MIN_SPLIT_RATIO} and {MAX_SPLIT_RATIO}",
                self.default_split_ratio
            )));
        }
        if self.graph_tab_title.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "graph_tab_title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Returns the default settings path (`<config_dir>/tablayout/settings.toml`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
