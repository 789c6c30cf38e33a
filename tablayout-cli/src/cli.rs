//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// `TabLayout` command-line interface for driving the panel layout engine
#[derive(Parser)]
#[command(name = "tablayout-cli")]
#[command(author, version, about = "TabLayout command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, env = "TABLAYOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a layout script
    #[command(about = "Run a script of layout operations and print the result")]
    Run {
        /// Script file, or `-` to read from stdin
        script: PathBuf,

        /// Output format for the final layout
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,

        /// Print the layout after every step, not only at the end
        #[arg(long)]
        steps: bool,
    },

    /// Run the built-in walkthrough
    #[command(about = "Open two files, split, close one, printing each step")]
    Demo {
        /// Output format for each snapshot
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Show effective settings
    #[command(about = "Print the effective settings as TOML")]
    Config,

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format for layout snapshots
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented, human-readable tree
    Text,
    /// Output as JSON
    Json,
}
