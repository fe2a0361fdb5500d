//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame, the current term, and
//! the result count aligned right.

use crate::ui::frame::{Frame, Line};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

use super::BOX_MARGIN;

/// Renders the search box below the control.
///
/// # Layout
///
/// ```text
/// [margin] ┌────────────────────────┐
/// [margin] │ Search: h     1 result │
/// [margin] └────────────────────────┘
/// ```
///
/// The box registers no hit regions; it is edited by typing.
pub fn render_search_bar(frame: &mut Frame, search: &SearchBarInfo, theme: &Theme) {
    let box_width = frame.cols().saturating_sub(BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let mut top = Line::new();
    top.pad(BOX_MARGIN);
    top.push(&border, &format!("┌{}┐", "─".repeat(inner_width)));
    frame.push_line(top);

    let count = search
        .result_label
        .as_deref()
        .map(|label| format!("{label} "))
        .unwrap_or_default();
    let count_width = count.chars().count();
    let text = truncate(
        &format!(" Search: {}", search.term),
        inner_width.saturating_sub(count_width),
    );

    let mut middle = Line::new();
    middle.pad(BOX_MARGIN);
    middle.push(&border, "│");
    middle.push(&Theme::fg(&theme.colors.control_fg), &text);
    middle.pad_to(BOX_MARGIN + 1 + inner_width.saturating_sub(count_width));
    middle.push(&Theme::fg(&theme.colors.placeholder_fg), &count);
    middle.push(&border, "│");
    frame.push_line(middle);

    let mut bottom = Line::new();
    bottom.pad(BOX_MARGIN);
    bottom.push(&border, &format!("└{}┘", "─".repeat(inner_width)));
    frame.push_line(bottom);
}
