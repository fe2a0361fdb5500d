//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `SelectState` → `SelectViewModel`
//! 2. **Component Rendering**: the control and search box are shared, the
//!    option list is dispatched on the render variant
//!
//! [`compose`] builds the [`Frame`] without printing and is what tests use.
//! [`render`] composes and prints.

use crate::app::{SelectMode, SelectState};
use crate::ui::components;
use crate::ui::frame::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, MenuView, SelectViewModel};

/// Renders the widget to stdout and returns the frame for click resolution.
///
/// # Example
///
/// ```rust,no_run
/// use zelect::app::{SelectProps, SelectState};
/// use zelect::ui::{render, Theme};
///
/// let state = SelectState::new(SelectProps::default(), Theme::default())?;
/// let frame = render(&state, 24, 80);
/// assert_eq!(frame.lines().len(), 3);
/// # Ok::<(), zelect::ZelectError>(())
/// ```
pub fn render(state: &SelectState, rows: usize, cols: usize) -> Frame {
    let frame = compose(state, rows, cols);
    frame.print();
    frame
}

/// Builds the frame for `state` in a `rows` × `cols` pane.
#[must_use]
pub fn compose(state: &SelectState, rows: usize, cols: usize) -> Frame {
    let viewmodel = state.compute_viewmodel();
    compose_viewmodel(&viewmodel, &state.theme, cols).fit(rows)
}

/// Builds the configuration error panel shown instead of the widget.
#[must_use]
pub fn compose_error(message: &str, theme: &Theme, rows: usize, cols: usize) -> Frame {
    let mut frame = Frame::new(cols);
    let empty = EmptyState {
        message: "Configuration error".to_string(),
        subtitle: message.to_string(),
    };
    components::render_empty_state(&mut frame, &empty, theme);
    frame.fit(rows)
}

fn compose_viewmodel(vm: &SelectViewModel, theme: &Theme, cols: usize) -> Frame {
    let mut frame = Frame::new(cols);

    components::render_control(&mut frame, &vm.control, vm.clear_all, theme);

    if let Some(search) = &vm.search_bar {
        components::render_search_bar(&mut frame, search, theme);
    }

    let Some(menu) = &vm.menu else {
        return frame;
    };

    match (vm.mode, menu) {
        (SelectMode::Grouped, MenuView::Grouped(groups)) => {
            components::render_grouped_menu(&mut frame, groups, theme);
        }
        (SelectMode::Multi, MenuView::Multi(items)) => {
            components::render_multi_menu(&mut frame, items, theme);
        }
        (_, MenuView::Flat(items)) => components::render_plain_menu(&mut frame, items, theme),
        (mode, _) => {
            tracing::warn!(mode = ?mode, "menu shape does not match render variant");
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, SelectProps};
    use crate::domain::{OptionGroup, RawOption};
    use crate::ui::frame::HitTarget;

    fn open_state(props: SelectProps) -> SelectState {
        let mut state = SelectState::new(props, Theme::default()).unwrap();
        handle_event(&mut state, &Event::ActivateControl);
        state
    }

    fn flat(labels: &[&str]) -> Vec<RawOption> {
        labels.iter().copied().map(RawOption::from).collect()
    }

    #[test]
    fn closed_widget_is_just_the_control() {
        let state = SelectState::new(
            SelectProps {
                options: flat(&["HTML"]),
                ..Default::default()
            },
            Theme::default(),
        )
        .unwrap();
        let frame = compose(&state, 24, 40);

        assert_eq!(frame.lines().len(), 3);
        assert!(frame.plain_lines()[1].contains("Select Option"));
        assert!(frame.plain_lines()[1].ends_with("▾ │"));
        assert_eq!(frame.hit_test(1, 10), Some(&HitTarget::Control));
    }

    #[test]
    fn plain_menu_marks_the_value() {
        let state = open_state(SelectProps {
            options: flat(&["HTML", "CSS"]),
            value: Some("CSS".into()),
            ..Default::default()
        });
        let lines = compose(&state, 24, 40).plain_lines();

        assert_eq!(lines[3], "    HTML");
        assert_eq!(lines[4], "  ✓ CSS");
    }

    #[test]
    fn every_option_row_is_clickable() {
        let state = open_state(SelectProps {
            options: flat(&["HTML", "CSS"]),
            ..Default::default()
        });
        let frame = compose(&state, 24, 40);

        assert_eq!(frame.event_at(3, 4), Some(Event::SelectOption("HTML".into())));
        assert_eq!(frame.event_at(4, 2), Some(Event::SelectOption("CSS".into())));
        assert_eq!(frame.event_at(4, 30), None);
    }

    #[test]
    fn grouped_menu_renders_headers_then_members() {
        let state = open_state(SelectProps {
            options: vec![
                RawOption::Group(OptionGroup::new("frontend", vec!["React.JS".into()])),
                RawOption::Group(OptionGroup::new("backend", vec!["Node.JS".into()])),
            ],
            grouped: true,
            ..Default::default()
        });
        let frame = compose(&state, 24, 40);
        let lines = frame.plain_lines();

        assert_eq!(lines[3], "  FRONTEND");
        assert_eq!(lines[4], "      React.JS");
        assert_eq!(lines[5], "  BACKEND");
        assert_eq!(frame.hit_test(3, 3), None);
        assert_eq!(frame.event_at(6, 7), Some(Event::SelectOption("Node.JS".into())));
    }

    #[test]
    fn search_bar_shows_term_and_count() {
        let mut state = open_state(SelectProps {
            options: flat(&["HTML", "CSS", "JS"]),
            searchable: true,
            ..Default::default()
        });
        handle_event(&mut state, &Event::SearchChanged("h".into()));
        let lines = compose(&state, 24, 40).plain_lines();

        assert!(lines[1].contains("1 result"));
        assert!(lines[4].contains("Search: h"));
        assert!(lines[4].contains("1 result"));
        assert_eq!(lines[6], "    HTML");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn empty_filter_result_renders_no_options_row() {
        let mut state = open_state(SelectProps {
            options: flat(&["HTML"]),
            searchable: true,
            ..Default::default()
        });
        handle_event(&mut state, &Event::SearchChanged("zzz".into()));
        let lines = compose(&state, 24, 40).plain_lines();

        assert_eq!(lines.last().map(String::as_str), Some("  No options"));
    }

    #[test]
    fn multi_rows_expose_item_clear_controls() {
        let mut state = open_state(SelectProps {
            options: flat(&["HTML", "CSS"]),
            multi: true,
            clearable: true,
            ..Default::default()
        });
        handle_event(&mut state, &Event::SelectOption("CSS".into()));
        let frame = compose(&state, 24, 40);

        assert!(frame.plain_lines()[1].contains("CSS"));
        assert_eq!(frame.plain_lines()[4], "  ✓ CSS  [x]");

        let clear = frame
            .region_for(&HitTarget::ClearItem("CSS".into()))
            .unwrap();
        assert_eq!(clear.line, 4);
        assert_eq!(clear.columns, 9..12);
        assert!(frame.region_for(&HitTarget::ClearItem("HTML".into())).is_none());
    }

    #[test]
    fn clear_all_only_when_clearable_and_enabled() {
        let props = SelectProps {
            options: flat(&["HTML"]),
            value: Some("HTML".into()),
            clearable: true,
            ..Default::default()
        };
        let state = SelectState::new(props.clone(), Theme::default()).unwrap();
        let frame = compose(&state, 24, 40);
        assert!(frame.plain_lines()[1].contains('✕'));
        let region = frame.region_for(&HitTarget::ClearAll).unwrap();
        assert_eq!(
            frame.event_at(region.line, region.columns.start),
            Some(Event::ClearAll)
        );

        let disabled = SelectState::new(
            SelectProps {
                disabled: true,
                ..props
            },
            Theme::default(),
        )
        .unwrap();
        let frame = compose(&disabled, 24, 40);
        assert!(!frame.plain_lines()[1].contains('✕'));
        assert!(frame.regions().is_empty());
    }

    #[test]
    fn frame_is_cut_to_pane_height() {
        let state = open_state(SelectProps {
            options: flat(&["a", "b", "c", "d"]),
            ..Default::default()
        });
        let frame = compose(&state, 5, 40);
        assert_eq!(frame.lines().len(), 5);
        assert!(frame.region_for(&HitTarget::Option("d".into())).is_none());
    }

    #[test]
    fn error_panel_shows_message() {
        let frame = compose_error("options are required", &Theme::default(), 24, 40);
        let lines = frame.plain_lines();
        assert!(lines[2].contains("Configuration error"));
        assert!(lines[3].contains("options are required"));
        assert!(frame.regions().is_empty());
    }
}
