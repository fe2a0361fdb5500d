//! Widget state and view model computation.
//!
//! This module defines [`SelectState`], the single source of truth for one
//! widget instance, and [`SelectProps`], the host-supplied configuration it is
//! built from.
//!
//! # State Components
//!
//! - **Options**: validated [`OptionSet`], fixed at construction
//! - **Mode**: [`SelectMode`] picked from the grouped/multi flags
//! - **Value**: single/grouped selection, seeded from the host's `value`
//! - **Selected**: multi selection, kept in pick order
//! - **Search term**: text typed into the search box
//! - **Menu**: open/closed flag of the option list
//!
//! Filtered options are never stored. [`SelectState::filtered_options`]
//! recomputes them from the full set and the current term on every call.
//!
//! # Example
//!
//! ```rust
//! use zelect::app::{SelectProps, SelectState};
//! use zelect::ui::Theme;
//!
//! let props = SelectProps {
//!     options: vec!["HTML".into(), "CSS".into()],
//!     searchable: true,
//!     ..Default::default()
//! };
//! let state = SelectState::new(props, Theme::default())?;
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.control.text, "Select Option");
//! # Ok::<(), zelect::ZelectError>(())
//! ```

use super::filter;
use super::modes::{MenuState, SelectMode};
use super::validation::validate;
use crate::domain::{OptionSet, RawOption, Result};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ControlInfo, DisplayItem, GroupView, MenuView, SearchBarInfo, SelectViewModel,
};
use indexmap::IndexSet;

/// Placeholder shown when nothing is selected and no placeholder was given.
pub const DEFAULT_PLACEHOLDER: &str = "Select Option";

/// Host-supplied widget configuration.
///
/// Mirrors the recognised props of the widget. Construct with struct update
/// syntax over [`Default`].
#[derive(Debug, Clone, Default)]
pub struct SelectProps {
    /// Untyped options; validated against the mode flags at construction.
    pub options: Vec<RawOption>,

    /// Text shown when nothing is selected. Default: `"Select Option"`.
    pub placeholder: Option<String>,

    /// Enables the clear affordances.
    pub clearable: bool,

    /// Enables the search box while the menu is open.
    pub searchable: bool,

    /// Suppresses all interaction.
    pub disabled: bool,

    /// Renders grouped options. Takes precedence over `multi`.
    pub grouped: bool,

    /// Allows selecting several labels.
    pub multi: bool,

    /// Initial value for single/grouped mode. Ignored in multi mode.
    pub value: Option<String>,

    /// The host owns the single/grouped value and syncs it back after each
    /// change notification.
    pub controlled: bool,
}

/// State of one select widget instance.
#[derive(Debug, Clone)]
pub struct SelectState {
    /// Full validated option set.
    pub options: OptionSet,

    /// Selection mode and render variant.
    pub mode: SelectMode,

    /// Placeholder text (already defaulted).
    pub placeholder: String,

    pub clearable: bool,
    pub searchable: bool,
    pub disabled: bool,

    /// Whether single/grouped value changes are delegated to the host.
    pub controlled: bool,

    /// Current single/grouped value.
    pub value: Option<String>,

    /// Current multi selection, in pick order.
    pub selected: IndexSet<String>,

    /// Current search term. Empty when not searching.
    pub search_term: String,

    /// Whether the option list is shown.
    pub menu: MenuState,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl SelectState {
    /// Validates `props` and creates the widget state with defaults: seeded
    /// value, empty multi selection, empty search term, closed menu.
    ///
    /// # Errors
    ///
    /// Returns [`ZelectError::Configuration`](crate::ZelectError::Configuration)
    /// when the options do not fit the mode flags.
    pub fn new(props: SelectProps, theme: Theme) -> Result<Self> {
        let mode = SelectMode::from_flags(props.grouped, props.multi);
        let options = validate(mode, &props.options)?;

        let value = props.value.filter(|value| !value.is_empty());
        let value = if mode == SelectMode::Multi {
            if let Some(ignored) = &value {
                tracing::debug!(value = %ignored, "initial value ignored in multi mode");
            }
            None
        } else {
            value
        };

        tracing::debug!(
            mode = ?mode,
            option_count = options.option_count(),
            controlled = props.controlled,
            "select state created"
        );

        Ok(Self {
            options,
            mode,
            placeholder: props
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            clearable: props.clearable,
            searchable: props.searchable,
            disabled: props.disabled,
            controlled: props.controlled && mode.is_single_value(),
            value,
            selected: IndexSet::new(),
            search_term: String::new(),
            menu: MenuState::Closed,
            theme,
        })
    }

    /// Options matching the current search term, recomputed from the full set.
    #[must_use]
    pub fn filtered_options(&self) -> OptionSet {
        filter::filter(&self.options, &self.search_term)
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Whether the selection indicator is shown beside `label`.
    ///
    /// Single and grouped modes compare case-insensitively with the current
    /// value; multi mode checks exact membership.
    #[must_use]
    pub fn is_marked(&self, label: &str) -> bool {
        match self.mode {
            SelectMode::Single | SelectMode::Grouped => self
                .value
                .as_ref()
                .is_some_and(|value| value.to_lowercase() == label.to_lowercase()),
            SelectMode::Multi => self.selected.contains(label),
        }
    }

    /// Clear affordances exist at all: clearable and not disabled.
    #[must_use]
    pub const fn clear_enabled(&self) -> bool {
        self.clearable && !self.disabled
    }

    /// The clear-all control is reachable right now.
    #[must_use]
    pub fn can_clear_all(&self) -> bool {
        if !self.clear_enabled() {
            return false;
        }
        match self.mode {
            SelectMode::Single | SelectMode::Grouped => self.value.is_some(),
            SelectMode::Multi => !self.selected.is_empty(),
        }
    }

    /// The search box is rendered: searchable, enabled, and the menu is open.
    #[must_use]
    pub const fn search_visible(&self) -> bool {
        self.searchable && !self.disabled && self.menu.is_open()
    }

    /// Current multi selection in pick order.
    #[must_use]
    pub fn selected_values(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Computes a renderable view model from the current state.
    ///
    /// The control text follows this precedence:
    /// 1. The current value (single/grouped) or the comma-joined selection (multi)
    /// 2. The result count while a search term is set
    /// 3. The placeholder
    #[must_use]
    pub fn compute_viewmodel(&self) -> SelectViewModel {
        let filtered = self.filtered_options();
        let result_label = self
            .is_searching()
            .then(|| filter::result_label(filtered.option_count()));

        let current = match self.mode {
            SelectMode::Single | SelectMode::Grouped => self.value.clone(),
            SelectMode::Multi => {
                (!self.selected.is_empty()).then(|| self.selected_values().join(", "))
            }
        };

        let (text, is_placeholder) = match (current, &result_label) {
            (Some(text), _) => (text, false),
            (None, Some(label)) => (label.clone(), true),
            (None, None) => (self.placeholder.clone(), true),
        };

        let menu = (self.menu.is_open() && !self.disabled).then(|| self.compute_menu(&filtered));

        SelectViewModel {
            mode: self.mode,
            control: ControlInfo {
                text,
                is_placeholder,
                is_open: self.menu.is_open(),
                is_disabled: self.disabled,
            },
            clear_all: self.can_clear_all(),
            search_bar: self.search_visible().then(|| SearchBarInfo {
                term: self.search_term.clone(),
                result_label,
            }),
            menu,
        }
    }

    fn compute_menu(&self, filtered: &OptionSet) -> MenuView {
        match (self.mode, filtered) {
            (SelectMode::Grouped, OptionSet::Grouped(groups)) => MenuView::Grouped(
                groups
                    .iter()
                    .map(|group| GroupView {
                        name: group.name.clone(),
                        items: group
                            .members
                            .iter()
                            .map(|label| self.compute_display_item(label))
                            .collect(),
                    })
                    .collect(),
            ),
            (SelectMode::Multi, OptionSet::Flat(labels)) => MenuView::Multi(
                labels
                    .iter()
                    .map(|label| self.compute_display_item(label))
                    .collect(),
            ),
            (_, other) => MenuView::Flat(
                other
                    .labels()
                    .map(|label| self.compute_display_item(label))
                    .collect(),
            ),
        }
    }

    fn compute_display_item(&self, label: &str) -> DisplayItem {
        let is_selected = self.is_marked(label);
        DisplayItem {
            label: label.to_string(),
            is_selected,
            show_clear: self.mode == SelectMode::Multi && is_selected && self.clear_enabled(),
            highlight_range: filter::match_range(label, &self.search_term),
        }
    }
}
