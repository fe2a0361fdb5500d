//! Empty state component renderer.
//!
//! Renders the centered message panel shown instead of the widget when the
//! plugin configuration could not be turned into a widget.

use unicode_width::UnicodeWidthStr;

use crate::ui::frame::{Frame, Line};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Blank lines above the message.
const TOP_PADDING: usize = 2;

/// Renders a two-line centered message.
///
/// # Layout
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE
/// [left padding] subtitle
/// ```
///
/// The message uses `error_fg` in bold, the subtitle `placeholder_fg` dimmed.
pub fn render_empty_state(frame: &mut Frame, empty: &EmptyState, theme: &Theme) {
    for _ in 0..TOP_PADDING {
        frame.push_line(Line::new());
    }

    let message_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    frame.push_line(centered(&empty.message, &message_style, frame.cols()));

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.placeholder_fg));
    frame.push_line(centered(&empty.subtitle, &subtitle_style, frame.cols()));
}

fn centered(text: &str, style: &str, cols: usize) -> Line {
    let text = truncate(text, cols);
    let padding = cols.saturating_sub(text.width()) / 2;

    let mut line = Line::new();
    line.pad(padding);
    line.push(style, &text);
    line
}
