//! Core type definitions for the panel layout engine
//!
//! This module contains the identifier newtypes, the tab record and the
//! small enums (tab kind, split orientation, drop direction) shared by the
//! tab registry and the panel tree.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for an open tab.
///
/// Identifiers are globally unique for the lifetime of the process and are
/// never reused after a tab is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TabId(pub Uuid);

impl TabId {
    /// Creates a new random tab ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tab({})", self.0)
    }
}

/// Unique identifier for a node (leaf or split) in the panel tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PanelId(pub Uuid);

impl PanelId {
    /// Creates a new random panel ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Panel({})", self.0)
    }
}

/// What a tab displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    /// A text editor bound to a file name.
    Editor,
    /// The singleton graph view.
    Graph,
    /// A template view.
    Template,
}

impl fmt::Display for TabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editor => write!(f, "editor"),
            Self::Graph => write!(f, "graph"),
            Self::Template => write!(f, "template"),
        }
    }
}

impl FromStr for TabKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "editor" => Ok(Self::Editor),
            "graph" => Ok(Self::Graph),
            "template" => Ok(Self::Template),
            other => Err(format!("unknown tab kind: {other}")),
        }
    }
}

/// A logical open document or view.
///
/// Tabs are immutable once created: neither the title nor the kind can be
/// changed in place. Closing and reopening yields a new [`TabId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    id: TabId,
    title: String,
    kind: TabKind,
}

impl Tab {
    /// Creates a tab with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, kind: TabKind) -> Self {
        Self {
            id: TabId::new(),
            title: title.into(),
            kind,
        }
    }

    /// Returns the tab identifier.
    #[must_use]
    pub const fn id(&self) -> TabId {
        self.id
    }

    /// Returns the tab title (the file name for editor tabs).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tab kind.
    #[must_use]
    pub const fn kind(&self) -> TabKind {
        self.kind
    }
}

/// Axis along which a split arranges its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children side by side (first = left, second = right).
    Horizontal,
    /// Children stacked (first = top, second = bottom).
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(format!("unknown orientation: {other}")),
        }
    }
}

/// Edge of a leaf at which a new panel is created by a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// New panel above the original.
    Top,
    /// New panel below the original.
    Bottom,
    /// New panel left of the original.
    Left,
    /// New panel right of the original.
    Right,
}

impl Direction {
    /// Returns the split orientation this direction produces.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Left | Self::Right => Orientation::Horizontal,
            Self::Top | Self::Bottom => Orientation::Vertical,
        }
    }

    /// Returns true if the new panel becomes the split's `first` child.
    #[must_use]
    pub const fn places_new_first(self) -> bool {
        matches!(self, Self::Top | Self::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_id_new_creates_unique_ids() {
        assert_ne!(TabId::new(), TabId::new());
    }

    #[test]
    fn panel_id_new_creates_unique_ids() {
        assert_ne!(PanelId::new(), PanelId::new());
    }

    #[test]
    fn id_display() {
        let uuid = Uuid::nil();
        assert!(format!("{}", TabId(uuid)).starts_with("Tab("));
        assert!(format!("{}", PanelId(uuid)).starts_with("Panel("));
    }

    #[test]
    fn new_tab_keeps_title_and_kind() {
        let tab = Tab::new("main.rs", TabKind::Editor);
        assert_eq!(tab.title(), "main.rs");
        assert_eq!(tab.kind(), TabKind::Editor);
    }

    #[test]
    fn direction_maps_to_orientation() {
        assert_eq!(Direction::Left.orientation(), Orientation::Horizontal);
        assert_eq!(Direction::Right.orientation(), Orientation::Horizontal);
        assert_eq!(Direction::Top.orientation(), Orientation::Vertical);
        assert_eq!(Direction::Bottom.orientation(), Orientation::Vertical);
    }

    #[test]
    fn direction_child_order() {
        assert!(Direction::Top.places_new_first());
        assert!(Direction::Left.places_new_first());
        assert!(!Direction::Bottom.places_new_first());
        assert!(!Direction::Right.places_new_first());
    }

    #[test]
    fn direction_parse_is_case_insensitive() {
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("top".parse::<Direction>(), Ok(Direction::Top));
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn tab_kind_round_trips_through_display() {
        for kind in [TabKind::Editor, TabKind::Graph, TabKind::Template] {
            assert_eq!(kind.to_string().parse::<TabKind>(), Ok(kind));
        }
    }
}
