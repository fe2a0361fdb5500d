//! Event handling and state transition logic.
//!
//! This module implements the reducer that processes user interaction and host
//! updates, mutating [`SelectState`] and returning the notifications the host
//! should act on.
//!
//! # Architecture
//!
//! 1. The host translates raw input (mouse click, keystroke, pipe message) into
//!    an [`Event`]
//! 2. [`handle_event`] pattern-matches the event against the current mode
//! 3. Local state is updated first
//! 4. [`Action`]s are returned for the host to execute, in order
//!
//! Every transition is total: events that do not apply in the current state
//! (disabled widget, closed menu, unknown label) are ignored and reported as
//! "no render, no actions".
//!
//! # Example
//!
//! ```rust
//! use zelect::app::{handle_event, Action, Event, SelectProps, SelectState};
//! use zelect::ui::Theme;
//!
//! let props = SelectProps { options: vec!["HTML".into(), "CSS".into()], ..Default::default() };
//! let mut state = SelectState::new(props, Theme::default())?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::ActivateControl);
//! assert_eq!(actions, vec![Action::MenuOpened]);
//!
//! handle_event(&mut state, &Event::SelectOption("CSS".into()));
//! assert_eq!(state.value.as_deref(), Some("CSS"));
//! # Ok::<(), zelect::ZelectError>(())
//! ```

use super::actions::Action;
use super::modes::{MenuState, SelectMode};
use super::state::SelectState;

/// Interactions and host updates the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The control surface was clicked; toggles the menu.
    ActivateControl,
    /// An option in the list was clicked.
    SelectOption(String),
    /// The per-item clear control of a multi selection was clicked.
    ClearItem(String),
    /// The clear-all control was clicked.
    ClearAll,
    /// The search box content changed. Carries the full term.
    SearchChanged(String),
    /// The host pushed a new controlled value (`None` clears).
    ValueSynced(Option<String>),
}

/// Processes an event, mutates widget state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `true` when visible state
/// changed. Actions are ordered and must be executed after this call returns.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut SelectState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = ?event, mode = ?state.mode).entered();

    if state.disabled && !matches!(event, Event::ValueSynced(_)) {
        tracing::debug!("widget disabled, ignoring event");
        return (false, vec![]);
    }

    match event {
        Event::ActivateControl => toggle_menu(state),
        Event::SelectOption(label) => {
            if !state.menu.is_open() {
                tracing::debug!(label = %label, "menu closed, ignoring selection");
                return (false, vec![]);
            }
            if !state.options.contains(label) {
                tracing::debug!(label = %label, "unknown option, ignoring selection");
                return (false, vec![]);
            }

            match state.mode {
                SelectMode::Single | SelectMode::Grouped => select_value(state, label),
                SelectMode::Multi => add_to_selection(state, label),
            }
        }
        Event::ClearItem(label) => {
            if state.mode != SelectMode::Multi || !state.clear_enabled() {
                return (false, vec![]);
            }
            if !state.menu.is_open() {
                tracing::debug!(label = %label, "menu closed, ignoring item clear");
                return (false, vec![]);
            }
            if state.selected.shift_remove(label) {
                tracing::debug!(label = %label, remaining = state.selected.len(), "item cleared");
                (
                    true,
                    vec![Action::SelectionChanged {
                        values: state.selected_values(),
                    }],
                )
            } else {
                (false, vec![])
            }
        }
        Event::ClearAll => clear_all(state),
        Event::SearchChanged(term) => {
            if !state.search_visible() {
                tracing::debug!("search box not visible, ignoring keystroke");
                return (false, vec![]);
            }

            state.search_term.clone_from(term);
            tracing::trace!(term = %state.search_term, "search term updated");

            (true, vec![Action::SearchChanged { term: term.clone() }])
        }
        Event::ValueSynced(value) => {
            if !state.mode.is_single_value() {
                tracing::debug!("value sync ignored in multi mode");
                return (false, vec![]);
            }

            let value = value.clone().filter(|value| !value.is_empty());
            if state.value == value {
                return (false, vec![]);
            }
            tracing::debug!(value = ?value, "controlled value synced");
            state.value = value;
            (true, vec![])
        }
    }
}

fn toggle_menu(state: &mut SelectState) -> (bool, Vec<Action>) {
    match state.menu {
        MenuState::Closed => {
            tracing::debug!("menu opened");
            state.menu = MenuState::Open;
            (true, vec![Action::MenuOpened])
        }
        MenuState::Open => {
            tracing::debug!("menu closed");
            state.menu = MenuState::Closed;
            state.search_term.clear();
            (true, vec![])
        }
    }
}

fn select_value(state: &mut SelectState, label: &str) -> (bool, Vec<Action>) {
    state.search_term.clear();

    if state.controlled {
        tracing::debug!(label = %label, "value change delegated to host");
    } else {
        tracing::debug!(label = %label, "value selected");
        state.value = Some(label.to_string());
    }

    (
        true,
        vec![Action::ValueChanged {
            value: Some(label.to_string()),
        }],
    )
}

fn add_to_selection(state: &mut SelectState, label: &str) -> (bool, Vec<Action>) {
    let had_term = !state.search_term.is_empty();
    state.search_term.clear();

    if !state.selected.insert(label.to_string()) {
        tracing::debug!(label = %label, "already selected, use the clear control to remove");
        return (had_term, vec![]);
    }

    tracing::debug!(label = %label, selected = state.selected.len(), "item added");
    (
        true,
        vec![Action::SelectionChanged {
            values: state.selected_values(),
        }],
    )
}

fn clear_all(state: &mut SelectState) -> (bool, Vec<Action>) {
    if !state.can_clear_all() {
        tracing::debug!("nothing to clear");
        return (false, vec![]);
    }

    match state.mode {
        SelectMode::Single | SelectMode::Grouped => {
            if state.controlled {
                tracing::debug!("clear delegated to host");
            } else {
                state.value = None;
            }
            (true, vec![Action::ValueChanged { value: None }])
        }
        SelectMode::Multi => {
            state.selected.clear();
            (
                true,
                vec![Action::SelectionChanged { values: vec![] }],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SelectProps;
    use crate::domain::{OptionGroup, RawOption};
    use crate::ui::Theme;

    fn state_with(props: SelectProps) -> SelectState {
        SelectState::new(props, Theme::default()).unwrap()
    }

    fn flat(labels: &[&str]) -> Vec<RawOption> {
        labels.iter().copied().map(RawOption::from).collect()
    }

    fn opened(mut state: SelectState) -> SelectState {
        handle_event(&mut state, &Event::ActivateControl);
        state
    }

    #[test]
    fn menu_open_emits_once_per_transition() {
        let mut state = state_with(SelectProps {
            options: flat(&["a"]),
            ..Default::default()
        });

        let (render, actions) = handle_event(&mut state, &Event::ActivateControl);
        assert!(render);
        assert_eq!(actions, vec![Action::MenuOpened]);

        let (_, actions) = handle_event(&mut state, &Event::ActivateControl);
        assert!(actions.is_empty());
        assert_eq!(state.menu, MenuState::Closed);

        let (_, actions) = handle_event(&mut state, &Event::ActivateControl);
        assert_eq!(actions, vec![Action::MenuOpened]);
    }

    #[test]
    fn closing_the_menu_drops_the_search_term() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["HTML", "CSS"]),
            searchable: true,
            ..Default::default()
        }));
        handle_event(&mut state, &Event::SearchChanged("h".into()));
        handle_event(&mut state, &Event::ActivateControl);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn single_select_replaces_value_and_clears_term() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["HTML", "CSS", "JS"]),
            searchable: true,
            ..Default::default()
        }));

        handle_event(&mut state, &Event::SearchChanged("c".into()));
        let (_, actions) = handle_event(&mut state, &Event::SelectOption("CSS".into()));

        assert_eq!(state.value.as_deref(), Some("CSS"));
        assert!(state.search_term.is_empty());
        assert_eq!(state.menu, MenuState::Open);
        assert_eq!(
            actions,
            vec![Action::ValueChanged {
                value: Some("CSS".into())
            }]
        );

        handle_event(&mut state, &Event::SelectOption("JS".into()));
        assert_eq!(state.value.as_deref(), Some("JS"));
    }

    #[test]
    fn selection_requires_open_menu_and_known_label() {
        let mut state = state_with(SelectProps {
            options: flat(&["HTML"]),
            ..Default::default()
        });
        assert_eq!(
            handle_event(&mut state, &Event::SelectOption("HTML".into())),
            (false, vec![])
        );

        let mut state = opened(state);
        assert_eq!(
            handle_event(&mut state, &Event::SelectOption("Rust".into())),
            (false, vec![])
        );
        assert!(state.value.is_none());
    }

    #[test]
    fn controlled_select_waits_for_host_sync() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["HTML", "CSS"]),
            value: Some("HTML".into()),
            controlled: true,
            clearable: true,
            ..Default::default()
        }));

        let (_, actions) = handle_event(&mut state, &Event::SelectOption("CSS".into()));
        assert_eq!(state.value.as_deref(), Some("HTML"));
        assert_eq!(
            actions,
            vec![Action::ValueChanged {
                value: Some("CSS".into())
            }]
        );

        handle_event(&mut state, &Event::ValueSynced(Some("CSS".into())));
        assert_eq!(state.value.as_deref(), Some("CSS"));

        let (_, actions) = handle_event(&mut state, &Event::ClearAll);
        assert_eq!(actions, vec![Action::ValueChanged { value: None }]);
        assert_eq!(state.value.as_deref(), Some("CSS"));
    }

    #[test]
    fn multi_reclick_does_not_remove() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["A", "B", "C"]),
            multi: true,
            clearable: true,
            ..Default::default()
        }));

        handle_event(&mut state, &Event::SelectOption("A".into()));
        handle_event(&mut state, &Event::SelectOption("B".into()));
        let (render, actions) = handle_event(&mut state, &Event::SelectOption("A".into()));

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.selected_values(), vec!["A", "B"]);

        let (_, actions) = handle_event(&mut state, &Event::ClearItem("A".into()));
        assert_eq!(state.selected_values(), vec!["B"]);
        assert_eq!(
            actions,
            vec![Action::SelectionChanged {
                values: vec!["B".into()]
            }]
        );
    }

    #[test]
    fn multi_item_clear_needs_clearable() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["A"]),
            multi: true,
            ..Default::default()
        }));
        handle_event(&mut state, &Event::SelectOption("A".into()));
        assert_eq!(
            handle_event(&mut state, &Event::ClearItem("A".into())),
            (false, vec![])
        );
        assert_eq!(state.selected_values(), vec!["A"]);
    }

    #[test]
    fn multi_item_clear_needs_open_menu() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["A", "B"]),
            multi: true,
            clearable: true,
            ..Default::default()
        }));
        handle_event(&mut state, &Event::SelectOption("A".into()));
        handle_event(&mut state, &Event::ActivateControl);
        assert!(!state.menu.is_open());

        assert_eq!(
            handle_event(&mut state, &Event::ClearItem("A".into())),
            (false, vec![])
        );
        assert_eq!(state.selected_values(), vec!["A"]);

        handle_event(&mut state, &Event::ActivateControl);
        assert_eq!(
            handle_event(&mut state, &Event::ClearItem("A".into())),
            (true, vec![Action::SelectionChanged { values: vec![] }])
        );
    }

    #[test]
    fn multi_clear_all_empties_selection() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["A", "B"]),
            multi: true,
            clearable: true,
            ..Default::default()
        }));
        assert_eq!(handle_event(&mut state, &Event::ClearAll), (false, vec![]));

        handle_event(&mut state, &Event::SelectOption("A".into()));
        handle_event(&mut state, &Event::SelectOption("B".into()));
        let (_, actions) = handle_event(&mut state, &Event::ClearAll);

        assert!(state.selected.is_empty());
        assert_eq!(actions, vec![Action::SelectionChanged { values: vec![] }]);
    }

    #[test]
    fn clear_all_is_unreachable_without_clearable() {
        let mut state = opened(state_with(SelectProps {
            options: flat(&["A"]),
            ..Default::default()
        }));
        handle_event(&mut state, &Event::SelectOption("A".into()));

        assert_eq!(handle_event(&mut state, &Event::ClearAll), (false, vec![]));
        assert_eq!(state.value.as_deref(), Some("A"));
    }

    #[test]
    fn clear_all_resets_single_value() {
        let mut state = state_with(SelectProps {
            options: flat(&["A"]),
            value: Some("A".into()),
            clearable: true,
            ..Default::default()
        });

        let (render, actions) = handle_event(&mut state, &Event::ClearAll);
        assert!(render);
        assert!(state.value.is_none());
        assert_eq!(actions, vec![Action::ValueChanged { value: None }]);
    }

    #[test]
    fn disabled_widget_ignores_interaction() {
        let mut state = state_with(SelectProps {
            options: flat(&["A"]),
            value: Some("A".into()),
            clearable: true,
            disabled: true,
            ..Default::default()
        });

        for event in [
            Event::ActivateControl,
            Event::SelectOption("A".into()),
            Event::ClearAll,
            Event::SearchChanged("a".into()),
        ] {
            assert_eq!(handle_event(&mut state, &event), (false, vec![]));
        }
        assert_eq!(state.menu, MenuState::Closed);
        assert_eq!(state.value.as_deref(), Some("A"));
    }

    #[test]
    fn search_requires_searchable_open_menu() {
        let mut state = state_with(SelectProps {
            options: flat(&["A"]),
            ..Default::default()
        });
        let mut state_open = opened(state.clone());

        assert_eq!(
            handle_event(&mut state, &Event::SearchChanged("a".into())),
            (false, vec![])
        );
        assert_eq!(
            handle_event(&mut state_open, &Event::SearchChanged("a".into())),
            (false, vec![])
        );
    }

    #[test]
    fn grouped_select_picks_member() {
        let mut state = opened(state_with(SelectProps {
            options: vec![RawOption::Group(OptionGroup::new(
                "backend",
                vec!["Node.JS".into(), "Mongoose".into()],
            ))],
            grouped: true,
            ..Default::default()
        }));

        handle_event(&mut state, &Event::SelectOption("Mongoose".into()));
        assert_eq!(state.value.as_deref(), Some("Mongoose"));
        assert!(state.is_marked("mongoose"));
    }
}
