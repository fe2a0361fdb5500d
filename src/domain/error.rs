//! Error types for the zelect widget.
//!
//! This module defines the centralized error type [`ZelectError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only construction can fail. Once a [`SelectState`](crate::app::SelectState)
//! exists, every interaction path is total and returns no error.

use thiserror::Error;

/// The main error type for zelect operations.
///
/// # Examples
///
/// ```
/// use zelect::ZelectError;
///
/// fn validate_options() -> Result<(), ZelectError> {
///     Err(ZelectError::Configuration("grouped mode needs grouped options".to_string()))
/// }
///
/// assert!(validate_options().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZelectError {
    /// The option set does not match the declared selection mode.
    ///
    /// Raised by the validation guard when, for example, a flat label list is
    /// passed to a grouped select or a grouped structure to a multi select.
    /// This is an integration mistake; hosts are expected to fix their setup
    /// rather than recover.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The configured option list could not be parsed.
    ///
    /// Occurs when the `options` configuration value looks like JSON but is
    /// not a valid array of labels, numbers, or group objects.
    #[error("Options error: {0}")]
    Options(String),

    /// A theme file could not be read or parsed.
    ///
    /// The plugin recovers by falling back to the default theme.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for zelect operations.
pub type Result<T> = std::result::Result<T, ZelectError>;
