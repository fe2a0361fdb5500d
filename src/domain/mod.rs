//! Domain layer for the zelect widget.
//!
//! This module contains the option model and error types, independent of
//! Zellij-specific APIs and of rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`options`]: Raw and validated option sets
//!
//! # Examples
//!
//! ```
//! use zelect::domain::{OptionSet, Result};
//!
//! fn languages() -> Result<OptionSet> {
//!     Ok(OptionSet::Flat(vec!["HTML".to_string(), "CSS".to_string()]))
//! }
//! # assert!(languages().is_ok());
//! ```

pub mod error;
pub mod options;

pub use error::{Result, ZelectError};
pub use options::{OptionGroup, OptionSet, RawOption};
