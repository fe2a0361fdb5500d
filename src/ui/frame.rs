//! Rendered output with clickable regions.
//!
//! Components do not print directly. They append [`Line`]s to a [`Frame`] and
//! register [`HitRegion`]s for every clickable span. The frame is printed once
//! at the end of a render pass and kept by the host, which resolves mouse
//! clicks through [`Frame::hit_test`].
//!
//! Lines and columns are 0-based, matching the coordinates Zellij reports for
//! mouse events. Column widths are terminal cells, not bytes.

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::app::Event;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// One rendered terminal line.
///
/// Keeps the ANSI-styled text for printing alongside the plain text, which is
/// what tests and width accounting look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    styled: String,
    plain: String,
    width: usize,
}

impl Line {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` wrapped in `style` and a reset.
    ///
    /// An empty `style` appends the text unstyled. Returns the columns the text
    /// occupies.
    pub fn push(&mut self, style: &str, text: &str) -> Range<usize> {
        if style.is_empty() {
            self.push_spans(text, text)
        } else {
            let styled = format!("{style}{text}{}", Theme::reset());
            self.push_spans(&styled, text)
        }
    }

    /// Appends pre-styled text whose visible content is `plain`.
    pub fn push_spans(&mut self, styled: &str, plain: &str) -> Range<usize> {
        let start = self.width;
        self.styled.push_str(styled);
        self.plain.push_str(plain);
        self.width += plain.width();
        start..self.width
    }

    /// Appends `columns` blank cells.
    pub fn pad(&mut self, columns: usize) {
        if columns > 0 {
            self.push("", &" ".repeat(columns));
        }
    }

    /// Pads the line with blanks up to `column`.
    pub fn pad_to(&mut self, column: usize) {
        self.pad(column.saturating_sub(self.width));
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn plain(&self) -> &str {
        &self.plain
    }

    #[must_use]
    pub fn styled(&self) -> &str {
        &self.styled
    }
}

/// Widget element a click can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Control,
    Option(String),
    ClearItem(String),
    ClearAll,
}

impl HitTarget {
    /// Event raised by clicking this target.
    #[must_use]
    pub fn into_event(self) -> Event {
        match self {
            Self::Control => Event::ActivateControl,
            Self::Option(label) => Event::SelectOption(label),
            Self::ClearItem(label) => Event::ClearItem(label),
            Self::ClearAll => Event::ClearAll,
        }
    }
}

/// A clickable span on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub line: usize,
    pub columns: Range<usize>,
    pub target: HitTarget,
}

/// Output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    cols: usize,
    lines: Vec<Line>,
    regions: Vec<HitRegion>,
}

impl Frame {
    /// Creates an empty frame for a pane `cols` cells wide.
    #[must_use]
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            lines: Vec::new(),
            regions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Appends a line and returns its index.
    pub fn push_line(&mut self, line: Line) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Registers a clickable span.
    ///
    /// Regions are matched in registration order, so nested targets must be
    /// added before the region that encloses them.
    pub fn add_region(&mut self, line: usize, columns: Range<usize>, target: HitTarget) {
        if !columns.is_empty() {
            self.regions.push(HitRegion {
                line,
                columns,
                target,
            });
        }
    }

    /// Returns the target under `(line, column)`, if any.
    #[must_use]
    pub fn hit_test(&self, line: usize, column: usize) -> Option<&HitTarget> {
        self.regions
            .iter()
            .find(|region| region.line == line && region.columns.contains(&column))
            .map(|region| &region.target)
    }

    /// Resolves a click into the event it raises.
    #[must_use]
    pub fn event_at(&self, line: usize, column: usize) -> Option<Event> {
        self.hit_test(line, column).cloned().map(HitTarget::into_event)
    }

    /// First region bound to `target`.
    #[must_use]
    pub fn region_for(&self, target: &HitTarget) -> Option<&HitRegion> {
        self.regions.iter().find(|region| &region.target == target)
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Visible text of every line, trailing blanks removed.
    #[must_use]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.plain().trim_end().to_string())
            .collect()
    }

    /// Drops lines (and their regions) beyond `rows`.
    #[must_use]
    pub fn fit(mut self, rows: usize) -> Self {
        if self.lines.len() > rows {
            tracing::trace!(lines = self.lines.len(), rows, "frame truncated to pane height");
            self.lines.truncate(rows);
            self.regions.retain(|region| region.line < rows);
        }
        self
    }

    /// Prints every line at its row.
    pub fn print(&self) {
        for (index, line) in self.lines.iter().enumerate() {
            position_cursor(index + 1, 1);
            print!("{}", line.styled());
        }
    }
}
