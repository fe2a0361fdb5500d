//! Shared rendering utilities and helpers.
//!
//! Low-level text handling used across the UI components: cursor placement,
//! cell-width truncation, and search match highlighting with proper ANSI
//! escape sequence management.
//!
//! All ranges are character indices, never byte indices.

use unicode_width::UnicodeWidthChar;

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max_cols` terminal cells.
///
/// Text that does not fit is cut and ends with `…`.
///
/// ```rust
/// use zelect::ui::helpers::truncate;
///
/// assert_eq!(truncate("TypeScript", 20), "TypeScript");
/// assert_eq!(truncate("TypeScript", 5), "Type…");
/// assert_eq!(truncate("TypeScript", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, max_cols: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_cols {
        return text.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_cols - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Styles `text` with `base`, highlighting the characters in `range`.
///
/// The highlighted section uses the theme's match colors; `base` is
/// re-applied after it so the rest of the label keeps its color. Ranges past
/// the end of `text` are clamped.
///
/// # Example
///
/// ```rust
/// use zelect::ui::helpers::highlighted_text;
/// use zelect::ui::Theme;
///
/// let theme = Theme::default();
/// let styled = highlighted_text("HTML", Some((0, 1)), "", &theme);
/// assert!(styled.contains("TML"));
/// ```
#[must_use]
pub fn highlighted_text(
    text: &str,
    range: Option<(usize, usize)>,
    base: &str,
    theme: &Theme,
) -> String {
    let Some((start, end)) = range else {
        return format!("{base}{text}{}", Theme::reset());
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    format!(
        "{base}{before}{}{}{matched}{}{base}{after}{}",
        Theme::fg(&theme.colors.match_highlight_fg),
        Theme::bg(&theme.colors.match_highlight_bg),
        Theme::reset(),
        Theme::reset(),
    )
}
