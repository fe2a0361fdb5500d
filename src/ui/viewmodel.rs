//! View model types representing renderable widget state.
//!
//! View models are computed from [`SelectState`](crate::app::SelectState) by
//! `compute_viewmodel()` and consumed by the renderer. They carry no behavior,
//! only display-ready data: the control text is already chosen, the menu is
//! already filtered, and every option knows whether it is marked and which
//! characters match the search term.
//!
//! # Example
//!
//! ```rust
//! use zelect::app::SelectMode;
//! use zelect::ui::viewmodel::{ControlInfo, DisplayItem, MenuView, SelectViewModel};
//!
//! let vm = SelectViewModel {
//!     mode: SelectMode::Single,
//!     control: ControlInfo {
//!         text: "CSS".to_string(),
//!         is_placeholder: false,
//!         is_open: true,
//!         is_disabled: false,
//!     },
//!     clear_all: false,
//!     search_bar: None,
//!     menu: Some(MenuView::Flat(vec![DisplayItem {
//!         label: "CSS".to_string(),
//!         is_selected: true,
//!         show_clear: false,
//!         highlight_range: None,
//!     }])),
//! };
//! assert_eq!(vm.menu.map(|menu| menu.item_count()), Some(1));
//! ```

use crate::app::SelectMode;

/// Complete view model for one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectViewModel {
    /// Render variant.
    pub mode: SelectMode,

    /// The always-visible control surface.
    pub control: ControlInfo,

    /// Whether the clear-all affordance is shown.
    pub clear_all: bool,

    /// Search box, present only while open and searchable.
    pub search_bar: Option<SearchBarInfo>,

    /// Option list, present only while the menu is open.
    pub menu: Option<MenuView>,
}

/// Display information for the control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlInfo {
    /// Value, joined selection, result count, or placeholder.
    pub text: String,

    /// `true` when `text` is the placeholder or the result count.
    pub is_placeholder: bool,

    pub is_open: bool,
    pub is_disabled: bool,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub term: String,

    /// Result count label, `None` while the term is empty.
    pub result_label: Option<String>,
}

/// Filtered option list, shaped by render variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuView {
    /// Plain variant rows.
    Flat(Vec<DisplayItem>),
    /// Grouped variant: headers followed by their members.
    Grouped(Vec<GroupView>),
    /// Multi variant rows, with per-item clear controls.
    Multi(Vec<DisplayItem>),
}

impl MenuView {
    /// Number of option rows, excluding group headers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Flat(items) | Self::Multi(items) => items.len(),
            Self::Grouped(groups) => groups.iter().map(|group| group.items.len()).sum(),
        }
    }
}

/// One group of the grouped variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub name: String,
    pub items: Vec<DisplayItem>,
}

/// Display information for a single option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Option label.
    pub label: String,

    /// Whether the selection indicator is shown.
    pub is_selected: bool,

    /// Whether a per-item clear control is shown (multi only).
    pub show_clear: bool,

    /// Characters matching the search term.
    ///
    /// `(start_index, end_index)` in character indices, exclusive end.
    pub highlight_range: Option<(usize, usize)>,
}

/// Centered two-line message.
///
/// Shown in place of the widget when configuration failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Configuration error").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
