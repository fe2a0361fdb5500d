//! User interface rendering layer with component-based architecture.
//!
//! This module turns widget state into ANSI-styled terminal output through
//! composable rendering components, and records where every clickable element
//! ended up so mouse input can be mapped back to widget events.
//!
//! # Architecture
//!
//! ```text
//! SelectState → compute_viewmodel → SelectViewModel → compose → Frame → print
//!                                                                  ↓
//!                                               mouse click → hit_test → Event
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable widget state
//! - [`renderer`]: Top-level rendering coordinator and variant dispatch
//! - [`frame`]: Rendered lines and hit regions
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod frame;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use frame::{Frame, HitRegion, HitTarget, Line};
pub use renderer::{compose, compose_error, render};
pub use theme::Theme;
pub use viewmodel::{
    ControlInfo, DisplayItem, EmptyState, GroupView, MenuView, SearchBarInfo, SelectViewModel,
};
