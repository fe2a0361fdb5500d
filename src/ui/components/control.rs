//! Control surface component renderer.
//!
//! The control is a bordered box that is always visible. It shows the value,
//! the joined multi selection, the result count while searching, or the
//! placeholder, followed by the clear-all affordance (when reachable) and the
//! open/closed arrow.

use crate::ui::frame::{Frame, HitTarget, Line};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlInfo;

use super::BOX_MARGIN;

const CLEAR_ALL: &str = " ✕ ";
const ARROW_CLOSED: &str = " ▾ ";
const ARROW_OPEN: &str = " ▴ ";

/// Renders the control box and registers its hit regions.
///
/// # Layout
///
/// ```text
/// [margin] ┌────────────────────────┐
/// [margin] │ HTML             ✕  ▾  │
/// [margin] └────────────────────────┘
/// ```
///
/// All three lines are bound to [`HitTarget::Control`]; the `✕` cells are
/// bound to [`HitTarget::ClearAll`] first so they take precedence. A disabled
/// control registers no regions at all.
pub fn render_control(frame: &mut Frame, control: &ControlInfo, clear_all: bool, theme: &Theme) {
    let box_width = frame.cols().saturating_sub(BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border_color = if control.is_disabled {
        &theme.colors.disabled_fg
    } else {
        &theme.colors.control_border
    };
    let border = Theme::fg(border_color);

    let text_style = if control.is_disabled {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.disabled_fg))
    } else if control.is_placeholder {
        theme.control_style(&theme.colors.placeholder_fg)
    } else {
        theme.control_style(&theme.colors.control_fg)
    };

    let arrow = if control.is_open { ARROW_OPEN } else { ARROW_CLOSED };
    let suffix_width = arrow.chars().count() + if clear_all { CLEAR_ALL.chars().count() } else { 0 };
    let text = truncate(&control.text, inner_width.saturating_sub(suffix_width + 1));

    let top = frame.push_line(edge(&border, '┌', '┐', inner_width));

    let mut middle = Line::new();
    middle.pad(BOX_MARGIN);
    middle.push(&border, "│");
    middle.push("", " ");
    middle.push(&text_style, &text);
    middle.pad_to(BOX_MARGIN + 1 + inner_width.saturating_sub(suffix_width));
    let clear_columns = clear_all.then(|| middle.push(&Theme::fg(&theme.colors.clear_fg), CLEAR_ALL));
    middle.push(&border, arrow);
    middle.push(&border, "│");
    let middle = frame.push_line(middle);

    let bottom = frame.push_line(edge(&border, '└', '┘', inner_width));

    if control.is_disabled {
        return;
    }

    if let Some(columns) = clear_columns {
        frame.add_region(middle, columns, HitTarget::ClearAll);
    }
    let columns = BOX_MARGIN..BOX_MARGIN + box_width;
    for line in [top, middle, bottom] {
        frame.add_region(line, columns.clone(), HitTarget::Control);
    }
}

fn edge(border: &str, left: char, right: char, inner_width: usize) -> Line {
    let mut line = Line::new();
    line.pad(BOX_MARGIN);
    line.push(border, &format!("{left}{}{right}", "─".repeat(inner_width)));
    line
}
