//! Selection mode and menu state types.
//!
//! This module defines the state machine enums of the widget. [`SelectMode`] is
//! fixed at construction and picks the render variant; [`MenuState`] flips
//! between `Closed` and `Open` as the user activates the control surface.
//!
//! # State Machine
//!
//! ```text
//!            ActivateControl (emits MenuOpened)
//!   Closed ─────────────────────────────────────▶ Open
//!     ▲                                             │
//!     └─────────────── ActivateControl ─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use zelect::app::modes::{MenuState, SelectMode};
//!
//! let mode = SelectMode::from_flags(true, true);
//! assert_eq!(mode, SelectMode::Grouped);
//! assert!(!MenuState::Closed.is_open());
//! ```

/// Selection mode, decided once from the host's mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// One value from a flat list (optionally searchable).
    Single,

    /// One value from a list of named groups.
    Grouped,

    /// Any number of values from a flat list.
    Multi,
}

impl SelectMode {
    /// Resolves the mode from the `grouped` and `multi` flags.
    ///
    /// Grouped takes precedence over multi; with neither flag the widget is a
    /// plain single select.
    #[must_use]
    pub const fn from_flags(grouped: bool, multi: bool) -> Self {
        if grouped {
            Self::Grouped
        } else if multi {
            Self::Multi
        } else {
            Self::Single
        }
    }

    /// Returns `true` for the modes that hold at most one value.
    #[must_use]
    pub const fn is_single_value(self) -> bool {
        matches!(self, Self::Single | Self::Grouped)
    }
}

/// Whether the option menu is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Only the control surface is rendered.
    #[default]
    Closed,

    /// The option list (and search box, if enabled) is rendered.
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
