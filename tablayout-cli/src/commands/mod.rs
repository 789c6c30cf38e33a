//! Command handler modules for the CLI.

mod completions;
mod config;
mod demo;
mod run;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Run {
            script,
            format,
            steps,
        } => run::cmd_run(config_path, &script, format, steps),
        Commands::Demo { format } => demo::cmd_demo(config_path, format),
        Commands::Config => config::cmd_config(config_path),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
