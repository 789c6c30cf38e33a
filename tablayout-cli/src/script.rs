//! Layout scripts.
//!
//! A script is one operation per line. Blank lines and lines starting with
//! `#` are skipped. Tabs are referenced by their 1-based position in the
//! registry and panels by their 1-based position in pre-order, both taken at
//! the moment the line runs.
//!
//! ```text
//! open a.ts
//! open b.ts
//! split 1 2 right     # move tab 2 into a new leaf right of leaf 1
//! close 1
//! ```

use std::str::FromStr;

use tablayout_core::layout::{Direction, PanelId, TabId};
use tablayout_core::{AppState, Drawer, Modal};

use crate::error::CliError;

/// One parsed script operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// `open <file>`
    Open(String),
    /// `graph`
    Graph,
    /// `close <tab#>`
    Close(usize),
    /// `activate <tab#>`
    Activate(usize),
    /// `split <panel#> <tab#> <direction>`
    Split {
        /// Leaf position
        panel: usize,
        /// Tab position
        tab: usize,
        /// Where the new leaf goes
        direction: Direction,
    },
    /// `resize <split#> <ratio>`
    Resize {
        /// Split position among split nodes in pre-order
        split: usize,
        /// New ratio
        ratio: f64,
    },
    /// `prune`
    Prune,
    /// `toggle <drawer>`
    Toggle(Drawer),
    /// `show <modal>`
    Show(Modal),
    /// `hide <modal>`
    Hide(Modal),
    /// `view <name|none>`
    View(Option<String>),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let arity = |n: usize| {
            if args.len() == n {
                Ok(())
            } else {
                Err(format!("{command} takes {n} argument(s), got {}", args.len()))
            }
        };

        match command.to_lowercase().as_str() {
            "open" => {
                if rest.is_empty() {
                    return Err("open needs a file name".to_string());
                }
                Ok(Self::Open(rest.to_string()))
            }
            "graph" => arity(0).map(|()| Self::Graph),
            "close" => {
                arity(1)?;
                Ok(Self::Close(position(args[0])?))
            }
            "activate" => {
                arity(1)?;
                Ok(Self::Activate(position(args[0])?))
            }
            "split" => {
                arity(3)?;
                Ok(Self::Split {
                    panel: position(args[0])?,
                    tab: position(args[1])?,
                    direction: args[2].parse()?,
                })
            }
            "resize" => {
                arity(2)?;
                let ratio = args[1]
                    .parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite())
                    .ok_or_else(|| format!("invalid ratio: {}", args[1]))?;
                Ok(Self::Resize {
                    split: position(args[0])?,
                    ratio,
                })
            }
            "prune" => arity(0).map(|()| Self::Prune),
            "toggle" => {
                arity(1)?;
                Ok(Self::Toggle(args[0].parse()?))
            }
            "show" => {
                arity(1)?;
                Ok(Self::Show(args[0].parse()?))
            }
            "hide" => {
                arity(1)?;
                Ok(Self::Hide(args[0].parse()?))
            }
            "view" => {
                arity(1)?;
                let view = match args[0] {
                    "none" | "-" => None,
                    name => Some(name.to_string()),
                };
                Ok(Self::View(view))
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Parses a 1-based position.
fn position(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("expected a position starting at 1, got {arg}")),
        Ok(n) => Ok(n),
    }
}

/// A step together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 1-based line number
    pub number: usize,
    /// Source text, comments stripped
    pub text: String,
    /// Parsed operation
    pub step: Step,
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns `CliError::Script` for the first line that does not parse.
pub fn parse(source: &str) -> Result<Vec<Line>, CliError> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let text = strip_comment(raw);
        if text.is_empty() {
            continue;
        }
        let step = text
            .parse::<Step>()
            .map_err(|message| CliError::script(number, message))?;
        lines.push(Line {
            number,
            text: text.to_string(),
            step,
        });
    }
    Ok(lines)
}

/// Removes a `#` comment. A `#` only starts a comment at the beginning of a
/// line or after whitespace, so file names like `a#b.ts` survive.
fn strip_comment(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        return "";
    }
    trimmed
        .find(" #")
        .or_else(|| trimmed.find("\t#"))
        .map_or(trimmed, |at| trimmed[..at].trim_end())
}

/// Applies one line to the session and describes what happened.
///
/// # Errors
///
/// Returns `CliError::Script` when a position does not name an existing tab,
/// leaf or split.
pub fn execute(state: &mut AppState, line: &Line) -> Result<String, CliError> {
    let fail = |message: String| CliError::script(line.number, message);

    let summary = match &line.step {
        Step::Open(name) => {
            let outcome = state.layout.open_editor_tab(name);
            if outcome.is_created() {
                format!("opened {name}")
            } else {
                format!("focused {name}")
            }
        }
        Step::Graph => {
            let outcome = state.layout.open_graph_tab();
            let title = title_of(state, outcome.tab_id());
            if outcome.is_created() {
                format!("opened {title}")
            } else {
                format!("focused {title}")
            }
        }
        Step::Close(n) => {
            let id = tab_at(state, *n).map_err(fail)?;
            let title = title_of(state, id);
            state.layout.close_tab(id);
            format!("closed {title}")
        }
        Step::Activate(n) => {
            let id = tab_at(state, *n).map_err(fail)?;
            state.layout.set_active_tab(id);
            format!("activated {}", title_of(state, id))
        }
        Step::Split {
            panel,
            tab,
            direction,
        } => {
            let leaf = leaf_at(state, *panel).map_err(fail)?;
            let id = tab_at(state, *tab).map_err(fail)?;
            state
                .layout
                .try_split_panel(leaf, id, *direction)
                .map_err(|e| fail(e.to_string()))?;
            format!(
                "split leaf #{panel}: {} moved {direction}",
                title_of(state, id)
            )
        }
        Step::Resize { split, ratio } => {
            let id = split_at(state, *split).map_err(fail)?;
            state.layout.set_split_ratio(id, *ratio);
            let applied = state
                .layout
                .root()
                .find_panel_by_id(id)
                .and_then(|node| node.as_split())
                .map_or(*ratio, |s| s.ratio);
            format!("resized split #{split} to {applied:.2}")
        }
        Step::Prune => {
            let pruned = state.layout.collapse_empty_leaves();
            format!("pruned {pruned} empty leaf(s)")
        }
        Step::Toggle(drawer) => {
            let open = state.chrome.toggle(*drawer);
            format!("{drawer} drawer {}", if open { "opened" } else { "closed" })
        }
        Step::Show(modal) => {
            state.chrome.show(*modal);
            format!("{modal} shown")
        }
        Step::Hide(modal) => {
            state.chrome.hide(*modal);
            format!("{modal} hidden")
        }
        Step::View(view) => {
            state.chrome.set_active_view(view.clone());
            view.as_ref()
                .map_or_else(|| "view reset".to_string(), |v| format!("view set to {v}"))
        }
    };

    tracing::debug!(line = line.number, text = %line.text, %summary, "Ran script line");
    Ok(summary)
}

fn tab_at(state: &AppState, n: usize) -> Result<TabId, String> {
    let tabs = state.layout.registry().tabs();
    tabs.get(n - 1)
        .map(|tab| tab.id())
        .ok_or_else(|| format!("tab #{n} does not exist ({} open)", tabs.len()))
}

fn leaf_at(state: &AppState, n: usize) -> Result<PanelId, String> {
    let leaves = state.layout.root().leaf_ids();
    leaves
        .get(n - 1)
        .copied()
        .ok_or_else(|| format!("leaf #{n} does not exist ({} leaves)", leaves.len()))
}

fn split_at(state: &AppState, n: usize) -> Result<PanelId, String> {
    let root = state.layout.root();
    let splits: Vec<PanelId> = root
        .node_ids()
        .into_iter()
        .filter(|id| root.find_panel_by_id(*id).is_some_and(|node| node.is_split()))
        .collect();
    splits
        .get(n - 1)
        .copied()
        .ok_or_else(|| format!("split #{n} does not exist ({} splits)", splits.len()))
}

fn title_of(state: &AppState, id: TabId) -> String {
    state
        .layout
        .registry()
        .get(id)
        .map_or_else(|| id.to_string(), |tab| tab.title().to_string())
}
