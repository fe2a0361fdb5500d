//! Composable UI component renderers.
//!
//! Each component appends its lines to a [`Frame`](crate::ui::frame::Frame)
//! and registers the hit regions for the cells it owns.
//!
//! # Components
//!
//! - [`control`]: Control box with value, clear-all, and arrow
//! - [`search`]: Search input box with result count
//! - [`menu`]: Option lists for the plain, grouped, and multi variants
//! - [`empty`]: Centered message panel for configuration failures
//!
//! # Layout
//!
//! ```text
//! [Control box - 3 lines]
//! [Search box - 3 lines, open and searchable only]
//! [Option rows, open only]
//! ```

mod control;
mod empty;
mod menu;
mod search;

pub use control::render_control;
pub use empty::render_empty_state;
pub use menu::{render_grouped_menu, render_multi_menu, render_plain_menu};
pub use search::render_search_bar;

/// Blank cells left and right of the boxes.
pub(crate) const BOX_MARGIN: usize = 1;
