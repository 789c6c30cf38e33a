//! Tracing integration for structured logging
//!
//! This module provides utilities for integrating the `tracing` crate into
//! `TabLayout`: subscriber initialization, the span macros used around
//! layout operations, and the standard span names.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingSettings;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create log file
    #[error("Failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Error level - only errors
    Error,
    /// Warn level - errors and warnings
    #[default]
    Warn,
    /// Info level - errors, warnings, and info
    Info,
    /// Debug level - all above plus debug messages
    Debug,
    /// Trace level - all messages including trace
    Trace,
}

impl TracingLevel {
    /// Converts to tracing crate's Level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Maps a `-v` count to a level (0 = warn, 1 = info, 2 = debug, 3+ = trace).
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Output destination for tracing logs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Output to stdout
    Stdout,
    /// Output to stderr
    #[default]
    Stderr,
    /// Output to a file
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the `[logging]` settings table.
    ///
    /// An unknown level name falls back to the default level. Logs go to
    /// `file` when set, otherwise to stderr.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let output = settings
            .file
            .clone()
            .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path });
        Self {
            level: settings.level.parse().unwrap_or_default(),
            output,
            filter: settings.filter.clone(),
        }
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn env_filter(&self) -> TracingResult<EnvFilter> {
        match self.filter {
            Some(ref custom) => EnvFilter::try_new(custom)
                .map_err(|e| TracingError::InitializationFailed(e.to_string())),
            None => Ok(EnvFilter::try_new(format!(
                "tablayout_core={level},tablayout_cli={level}",
                level = self.level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"))),
        }
    }
}

/// Initializes the tracing subscriber with the given configuration
///
/// This function should be called once at application startup.
/// Subsequent calls will return an error.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The filter string is invalid or the subscriber fails to initialize
/// - File output is configured but the file cannot be created
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = config.env_filter()?;

    match &config.output {
        TracingOutput::Stdout => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        TracingOutput::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        TracingOutput::File { path } => {
            let file = std::fs::File::create(path)
                .map_err(|e| TracingError::FileCreationFailed(e.to_string()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(false)
                        .with_writer(file),
                )
                .try_init()
        }
    }
    .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::info!(level = %config.level, "Tracing initialized");
    Ok(())
}

/// Macro for creating operation spans with standard fields
///
/// # Examples
///
/// ```ignore
/// use tablayout_core::trace_operation;
///
/// let _span = trace_operation!("layout.split_panel",
///     panel_id = %panel_id,
///     direction = %direction
/// );
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        ::tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        ::tracing::info_span!($name, $($field)*)
    };
}

/// Macro for creating debug-level operation spans
///
/// Similar to `trace_operation!` but at debug level for frequent operations.
#[macro_export]
macro_rules! trace_operation_debug {
    ($name:expr) => {
        ::tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        ::tracing::debug_span!($name, $($field)*)
    };
}

/// Standard span names for layout operations
pub mod span_names {
    /// Open (or reuse) an editor tab
    pub const OPEN_EDITOR_TAB: &str = "layout.open_editor_tab";
    /// Open (or reuse) the graph tab
    pub const OPEN_GRAPH_TAB: &str = "layout.open_graph_tab";
    /// Close a tab
    pub const CLOSE_TAB: &str = "layout.close_tab";
    /// Split a leaf panel
    pub const SPLIT_PANEL: &str = "layout.split_panel";
    /// Focus a tab
    pub const SET_ACTIVE_TAB: &str = "layout.set_active_tab";
    /// Resize a split
    pub const SET_SPLIT_RATIO: &str = "layout.set_split_ratio";
    /// Drop empty leaves
    pub const COLLAPSE_EMPTY_LEAVES: &str = "layout.collapse_empty_leaves";
    /// Run an operation script
    pub const SCRIPT_RUN: &str = "script.run";
}
