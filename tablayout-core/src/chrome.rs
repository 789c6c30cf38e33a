//! Drawer, modal and routed-view visibility
//!
//! These flags sit next to the layout but are independent of it: toggling a
//! drawer never touches tabs or panels, and layout operations never touch
//! these flags.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tokio::sync::watch;

/// A collapsible side or bottom panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawer {
    /// Left drawer.
    Left,
    /// Right drawer.
    Right,
    /// Bottom terminal drawer.
    Terminal,
}

impl FromStr for Drawer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "terminal" => Ok(Self::Terminal),
            other => Err(format!("unknown drawer: {other}")),
        }
    }
}

impl fmt::Display for Drawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}

/// A modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// File finder.
    Finder,
    /// Command palette.
    CommandPalette,
}

impl FromStr for Modal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "finder" => Ok(Self::Finder),
            "command-palette" | "palette" => Ok(Self::CommandPalette),
            other => Err(format!("unknown modal: {other}")),
        }
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finder => write!(f, "finder"),
            Self::CommandPalette => write!(f, "command-palette"),
        }
    }
}

/// Visibility of the window chrome around the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChromeState {
    /// Left drawer open
    pub left_drawer_open: bool,
    /// Right drawer open
    pub right_drawer_open: bool,
    /// Terminal drawer open
    pub terminal_open: bool,
    /// Finder modal shown
    pub finder_visible: bool,
    /// Command palette modal shown
    pub command_palette_visible: bool,
    /// View routed into the main area (`None` = default view)
    pub active_view: Option<String>,
}

impl ChromeState {
    /// Returns whether a drawer is open.
    #[must_use]
    pub const fn is_open(&self, drawer: Drawer) -> bool {
        match drawer {
            Drawer::Left => self.left_drawer_open,
            Drawer::Right => self.right_drawer_open,
            Drawer::Terminal => self.terminal_open,
        }
    }

    /// Returns whether a modal is shown.
    #[must_use]
    pub const fn is_visible(&self, modal: Modal) -> bool {
        match modal {
            Modal::Finder => self.finder_visible,
            Modal::CommandPalette => self.command_palette_visible,
        }
    }

    fn drawer_mut(&mut self, drawer: Drawer) -> &mut bool {
        match drawer {
            Drawer::Left => &mut self.left_drawer_open,
            Drawer::Right => &mut self.right_drawer_open,
            Drawer::Terminal => &mut self.terminal_open,
        }
    }

    fn modal_mut(&mut self, modal: Modal) -> &mut bool {
        match modal {
            Modal::Finder => &mut self.finder_visible,
            Modal::CommandPalette => &mut self.command_palette_visible,
        }
    }
}

/// Holds [`ChromeState`] and notifies subscribers when it changes.
#[derive(Debug)]
pub struct ChromeStore {
    tx: watch::Sender<ChromeState>,
}

impl ChromeStore {
    /// Creates a store with every drawer closed and no modal shown.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ChromeState::default());
        Self { tx }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ChromeState {
        self.tx.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ChromeState> {
        self.tx.subscribe()
    }

    /// Flips a drawer and returns its new state.
    pub fn toggle(&self, drawer: Drawer) -> bool {
        let mut open = false;
        self.tx.send_modify(|state| {
            let flag = state.drawer_mut(drawer);
            *flag = !*flag;
            open = *flag;
        });
        tracing::debug!(%drawer, open, "Toggled drawer");
        open
    }

    /// Opens or closes a drawer.
    pub fn set_open(&self, drawer: Drawer, open: bool) {
        self.update(|state| state.drawer_mut(drawer), open);
    }

    /// Shows a modal.
    pub fn show(&self, modal: Modal) {
        self.update(|state| state.modal_mut(modal), true);
    }

    /// Hides a modal.
    pub fn hide(&self, modal: Modal) {
        self.update(|state| state.modal_mut(modal), false);
    }

    /// Flips a modal and returns whether it is now shown.
    pub fn toggle_modal(&self, modal: Modal) -> bool {
        let mut visible = false;
        self.tx.send_modify(|state| {
            let flag = state.modal_mut(modal);
            *flag = !*flag;
            visible = *flag;
        });
        tracing::debug!(%modal, visible, "Toggled modal");
        visible
    }

    /// Routes a view into the main area, or back to the default with `None`.
    pub fn set_active_view(&self, view: Option<String>) {
        self.tx.send_if_modified(|state| {
            if state.active_view == view {
                false
            } else {
                tracing::debug!(view = ?view, "Routed view");
                state.active_view = view;
                true
            }
        });
    }

    fn update(&self, flag: impl FnOnce(&mut ChromeState) -> &mut bool, value: bool) {
        self.tx.send_if_modified(|state| {
            let slot = flag(state);
            let changed = *slot != value;
            *slot = value;
            changed
        });
    }
}

impl Default for ChromeStore {
    fn default() -> Self {
        Self::new()
    }
}
