//! CLI error types and exit codes.

use std::path::PathBuf;

use tablayout_core::ConfigError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, IO, or output errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Script error - a line could not be parsed or referenced a missing
    /// tab or panel
    pub const SCRIPT_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Script line rejected
    #[error("Script error on line {line}: {message}")]
    Script {
        /// 1-based line number in the script
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Script file could not be read
    #[error("Failed to read script {path}: {source}")]
    ReadScript {
        /// Script path as given on the command line
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Output serialization error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl CliError {
    /// Creates a script error for a line.
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, output, IO)
    /// - 2: Script error (parse failure, dangling reference)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Script { .. } => exit_codes::SCRIPT_ERROR,
            Self::Config(_) | Self::ReadScript { .. } | Self::Output(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
