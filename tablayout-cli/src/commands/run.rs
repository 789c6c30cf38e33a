//! Run a layout script command.

use std::path::Path;

use tablayout_core::AppState;
use tablayout_core::tracing::span_names;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::format_state;
use crate::script;
use crate::util::{load_settings, read_script};

/// Run command handler
pub fn cmd_run(
    config_path: Option<&Path>,
    script_path: &Path,
    format: OutputFormat,
    steps: bool,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let source = read_script(script_path)?;
    let lines = script::parse(&source)?;

    let _span = tablayout_core::trace_operation!(
        span_names::SCRIPT_RUN,
        script = %script_path.display(),
        lines = lines.len()
    )
    .entered();

    let mut state = AppState::new(&settings);
    for line in &lines {
        let summary = script::execute(&mut state, line)?;
        if steps {
            println!("[{}] {} => {summary}", line.number, line.text);
            println!("{}", format_state(&state, format)?);
            println!();
        }
    }

    if !steps {
        println!("{}", format_state(&state, format)?);
    }
    tracing::info!(lines = lines.len(), "Script finished");
    Ok(())
}
