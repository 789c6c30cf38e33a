//! Output formatting for layout snapshots.

use std::fmt::Write as _;

use serde::Serialize;
use tablayout_core::layout::{PanelNode, TabRegistry};
use tablayout_core::{AppState, ChromeState, Drawer, Modal};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Serializable view of a whole session
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Tabs in creation order plus the global active tab
    pub tabs: &'a TabRegistry,
    /// Panel tree
    pub layout: &'a PanelNode,
    /// Drawer and modal flags
    pub chrome: ChromeState,
}

impl<'a> From<&'a AppState> for Snapshot<'a> {
    fn from(state: &'a AppState) -> Self {
        Self {
            tabs: state.layout.registry(),
            layout: state.layout.root(),
            chrome: state.chrome.state(),
        }
    }
}

/// Formats the session in the requested format.
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_state(state: &AppState, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(format_text(state)),
        OutputFormat::Json => format_json(state),
    }
}

/// Format the session as JSON
///
/// # Errors
///
/// Returns `CliError::Output` if serialization fails.
pub fn format_json(state: &AppState) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&Snapshot::from(state))?)
}

/// Format the session as an indented text tree
#[must_use]
pub fn format_text(state: &AppState) -> String {
    let registry = state.layout.registry();
    let mut output = String::new();

    output.push_str("Tabs:\n");
    if registry.is_empty() {
        output.push_str("  (none)\n");
    }
    let title_width = registry
        .iter()
        .map(|t| t.title().len())
        .max()
        .unwrap_or(0);
    for (index, tab) in registry.iter().enumerate() {
        let marker = if registry.active() == Some(tab.id()) {
            '*'
        } else {
            ' '
        };
        let _ = writeln!(
            output,
            "  {marker} {:>2}  {:<title_width$}  {}",
            index + 1,
            tab.title(),
            tab.kind()
        );
    }

    output.push_str("Panels:\n");
    let mut leaf_number = 0;
    write_node(&mut output, registry, state.layout.root(), 1, &mut leaf_number);

    let chrome = state.chrome.state();
    let drawers: Vec<String> = [Drawer::Left, Drawer::Right, Drawer::Terminal]
        .into_iter()
        .filter(|d| chrome.is_open(*d))
        .map(|d| d.to_string())
        .collect();
    let modals: Vec<String> = [Modal::Finder, Modal::CommandPalette]
        .into_iter()
        .filter(|m| chrome.is_visible(*m))
        .map(|m| m.to_string())
        .collect();
    output.push_str("Chrome:\n");
    let _ = writeln!(output, "  drawers: {}", joined_or_dash(&drawers));
    let _ = writeln!(output, "  modals:  {}", joined_or_dash(&modals));
    let _ = writeln!(
        output,
        "  view:    {}",
        chrome.active_view.as_deref().unwrap_or("-")
    );

    output.trim_end().to_string()
}

fn write_node(
    output: &mut String,
    registry: &TabRegistry,
    node: &PanelNode,
    depth: usize,
    leaf_number: &mut usize,
) {
    let indent = "  ".repeat(depth);
    match node {
        PanelNode::Leaf(leaf) => {
            *leaf_number += 1;
            let tabs = if leaf.is_empty() {
                "(empty)".to_string()
            } else {
                leaf.tab_ids()
                    .iter()
                    .map(|id| {
                        let title = registry.get(*id).map_or("?", |t| t.title());
                        if leaf.active_tab() == Some(*id) {
                            format!("{title}*")
                        } else {
                            title.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(output, "{indent}leaf #{leaf_number}: {tabs}");
        }
        PanelNode::Split(split) => {
            let _ = writeln!(
                output,
                "{indent}split {} ({:.2})",
                split.orientation, split.ratio
            );
            write_node(output, registry, &split.first, depth + 1, leaf_number);
            write_node(output, registry, &split.second, depth + 1, leaf_number);
        }
    }
}

fn joined_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
