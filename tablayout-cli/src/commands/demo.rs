//! Built-in walkthrough command.

use std::path::Path;

use tablayout_core::AppState;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::format_state;
use crate::script;
use crate::util::load_settings;

/// Two files side by side, then the left one closed.
pub const DEMO_SCRIPT: &str = "\
open a.ts
open b.ts
split 1 2 right
close 1
";

/// Demo command handler
pub fn cmd_demo(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let mut state = AppState::new(&settings);

    println!("{}", format_state(&state, format)?);
    for line in script::parse(DEMO_SCRIPT)? {
        let summary = script::execute(&mut state, &line)?;
        println!();
        println!("> {} ({summary})", line.text);
        println!("{}", format_state(&state, format)?);
    }
    Ok(())
}
