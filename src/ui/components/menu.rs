//! Option list renderers, one per render variant.
//!
//! Every option row is indented under the control box and starts with the
//! selection indicator column:
//!
//! ```text
//!   ✓ HTML          plain / multi, selected
//!     CSS           plain / multi, not selected
//!   FRONTEND        grouped header
//!     ✓ React.JS    grouped member
//!   ✓ JS  [x]       multi, selected and clearable
//! ```
//!
//! A row's label cells are bound to [`HitTarget::Option`]; a multi row's
//! `[x]` cells are bound to [`HitTarget::ClearItem`].

use crate::ui::frame::{Frame, HitTarget, Line};
use crate::ui::helpers::{highlighted_text, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, GroupView};

use super::BOX_MARGIN;

const INDICATOR: &str = "✓ ";
const NO_INDICATOR: &str = "  ";
const CLEAR_ITEM: &str = "[x]";
const NO_OPTIONS: &str = "No options";

/// Renders the plain variant: one row per option.
pub fn render_plain_menu(frame: &mut Frame, items: &[DisplayItem], theme: &Theme) {
    if items.is_empty() {
        render_no_options(frame, theme);
        return;
    }
    for item in items {
        render_option_row(frame, item, 1, theme);
    }
}

/// Renders the grouped variant: a header row per group followed by its
/// members. Headers are not clickable.
pub fn render_grouped_menu(frame: &mut Frame, groups: &[GroupView], theme: &Theme) {
    if groups.is_empty() {
        render_no_options(frame, theme);
        return;
    }

    for group in groups {
        let mut header = Line::new();
        header.pad(BOX_MARGIN + 1);
        let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.group_header_fg));
        let width = frame.cols().saturating_sub(header.width());
        header.push(&style, &truncate(&group.name.to_uppercase(), width));
        frame.push_line(header);

        for item in &group.items {
            render_option_row(frame, item, 3, theme);
        }
    }
}

/// Renders the multi variant: like the plain variant, plus a `[x]` clear
/// control after each selected option when clearing is enabled.
pub fn render_multi_menu(frame: &mut Frame, items: &[DisplayItem], theme: &Theme) {
    if items.is_empty() {
        render_no_options(frame, theme);
        return;
    }
    for item in items {
        render_option_row(frame, item, 1, theme);
    }
}

fn render_option_row(frame: &mut Frame, item: &DisplayItem, indent: usize, theme: &Theme) {
    let mut line = Line::new();
    line.pad(BOX_MARGIN + indent);

    let selected_style = Theme::fg(&theme.colors.selected_fg);
    let label_style = if item.is_selected {
        format!("{}{selected_style}", Theme::bold())
    } else {
        Theme::fg(&theme.colors.option_fg)
    };

    let clear_width = if item.show_clear {
        CLEAR_ITEM.len() + 2
    } else {
        0
    };
    let label_room = frame
        .cols()
        .saturating_sub(line.width() + INDICATOR.chars().count() + clear_width);
    let label = truncate(&item.label, label_room);

    let indicator = if item.is_selected {
        line.push(&selected_style, INDICATOR)
    } else {
        line.push("", NO_INDICATOR)
    };
    let styled = highlighted_text(&label, item.highlight_range, &label_style, theme);
    let label_columns = line.push_spans(&styled, &label);

    let clear_columns = item.show_clear.then(|| {
        line.pad(2);
        line.push(&Theme::fg(&theme.colors.clear_fg), CLEAR_ITEM)
    });

    let index = frame.push_line(line);
    if let Some(columns) = clear_columns {
        frame.add_region(index, columns, HitTarget::ClearItem(item.label.clone()));
    }
    frame.add_region(
        index,
        indicator.start..label_columns.end,
        HitTarget::Option(item.label.clone()),
    );
}

fn render_no_options(frame: &mut Frame, theme: &Theme) {
    let mut line = Line::new();
    line.pad(BOX_MARGIN + 1);
    line.push(
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.placeholder_fg)),
        NO_OPTIONS,
    );
    frame.push_line(line);
}
