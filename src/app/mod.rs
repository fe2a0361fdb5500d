//! Application layer coordinating state, events, and actions.
//!
//! This module holds the widget's behavior, independent of any host. It sits
//! between the host (the Zellij plugin in main.rs, or a Rust program using
//! [`Select`]) and the domain layer.
//!
//! # Architecture
//!
//! The widget follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Event → handle_event → State Mutation → Actions → Host Callbacks
//!                                          ↓
//!                                   compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Notifications emitted by the event handler
//! - [`filter`]: Search filtering and result count formatting
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Selection mode and menu state types
//! - [`state`]: Widget state container and view model computation
//! - [`validation`]: Option shape checks performed at construction
//! - [`widget`]: Builder facade with callback hooks
//!
//! # Example
//!
//! ```rust
//! use zelect::app::{handle_event, Event, SelectProps, SelectState};
//! use zelect::ui::Theme;
//!
//! let props = SelectProps { options: vec!["a".into()], ..Default::default() };
//! let mut state = SelectState::new(props, Theme::default())?;
//! let (should_render, actions) = handle_event(&mut state, &Event::ActivateControl);
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), zelect::ZelectError>(())
//! ```

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;
pub mod validation;
pub mod widget;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{MenuState, SelectMode};
pub use state::{SelectProps, SelectState, DEFAULT_PLACEHOLDER};
pub use widget::{Select, SelectBuilder};
