//! `TabLayout` CLI - Command-line driver for the `TabLayout` panel engine
//!
//! Runs scripts of layout operations (open, close, activate, split, drawer
//! and modal toggles) against a fresh session and prints the resulting
//! layout as text or JSON.

mod cli;
mod commands;
mod error;
mod format;
mod script;
mod util;

use clap::Parser;
use cli::Cli;
use tablayout_core::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    init_logging(&cli);

    let result = commands::dispatch(config_path, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Sets up tracing from the `[logging]` settings, overridden by `-v`/`--quiet`.
fn init_logging(cli: &Cli) {
    let logging = util::load_settings(cli.config.as_deref())
        .map(|settings| settings.logging)
        .unwrap_or_default();

    let mut config = TracingConfig::from_settings(&logging);
    if cli.quiet {
        config = config.with_level(TracingLevel::Error);
        config.filter = None;
    } else if cli.verbose > 0 {
        config = config.with_level(TracingLevel::from_verbosity(cli.verbose));
        config.filter = None;
    }

    if let Err(e) = init_tracing(&config) {
        if !cli.quiet {
            eprintln!("Warning: {e}");
        }
    }
}
