//! Shared utility functions used across command modules.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use tablayout_core::LayoutSettings;
use tablayout_core::config::default_config_path;

use crate::error::CliError;

/// Resolves the settings file: the `--config` / `TABLAYOUT_CONFIG` value if
/// given, otherwise the platform default.
pub fn settings_path(config_path: Option<&Path>) -> Option<PathBuf> {
    config_path.map(Path::to_path_buf).or_else(default_config_path)
}

/// Loads settings for a command.
///
/// An explicitly named file must exist; the default location may be absent,
/// in which case defaults apply.
pub fn load_settings(config_path: Option<&Path>) -> Result<LayoutSettings, CliError> {
    match config_path {
        Some(path) if !path.exists() => Err(CliError::Config(format!(
            "Settings file not found: {}",
            path.display()
        ))),
        Some(path) => Ok(LayoutSettings::load(path)?),
        None => match default_config_path() {
            Some(path) => Ok(LayoutSettings::load_or_default(&path)?),
            None => Ok(LayoutSettings::default()),
        },
    }
}

/// Reads a script from a file, or from stdin when the path is `-`.
pub fn read_script(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::ReadScript {
            path: path.to_path_buf(),
            source,
        })
    }
}
