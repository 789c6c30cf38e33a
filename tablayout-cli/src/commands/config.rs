//! Show effective settings command.

use std::path::Path;

use crate::error::CliError;
use crate::util::{load_settings, settings_path};

/// Config command handler
pub fn cmd_config(config_path: Option<&Path>) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let toml = settings.to_toml_string()?;

    match settings_path(config_path) {
        Some(path) if path.exists() => println!("# Loaded from {}", path.display()),
        Some(path) => println!("# Defaults ({} does not exist)", path.display()),
        None => println!("# Defaults (no configuration directory)"),
    }
    print!("{toml}");
    Ok(())
}
