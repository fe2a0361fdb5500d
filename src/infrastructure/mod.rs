//! Infrastructure layer for the Zellij plugin sandbox: filesystem paths and
//! the CLI pipes that listen for notifications.

pub mod listeners;
pub mod paths;

pub use listeners::PipeListeners;
pub use paths::{expand_tilde, get_data_dir};
