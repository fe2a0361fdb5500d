//! Structured logging to a rotating file.
//!
//! Library code only emits `tracing` spans and events. The plugin binary
//! installs the subscriber once at load time:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingLog → zelect.log
//! ```
//!
//! # Configuration
//!
//! The level comes from the `trace_level` plugin option and accepts any
//! `EnvFilter` directive (`debug`, `zelect=trace`, …). Default: `"info"`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use zelect::observability::init_tracing;
//! use zelect::Config;
//!
//! let config = Config {
//!     trace_level: Some("debug".to_string()),
//!     ..Default::default()
//! };
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Size-rotated log file implementing `MakeWriter`

mod file_writer;
mod init;

pub use file_writer::RotatingLog;
pub use init::{init_tracing, init_tracing_in, LOG_FILE_NAME};
