//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingLog;
use crate::Config;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "zelect.log";

/// Initializes the global tracing subscriber.
///
/// Events at or above `config.trace_level` (default `"info"`) are written as
/// plain-text lines to `zelect.log` in the plugin data directory, rotated at
/// 10 MB with three backups.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Gives up silently if the directory cannot be created
/// - Only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    init_tracing_in(&crate::infrastructure::paths::get_data_dir(), config);
}

/// Like [`init_tracing`], writing into `data_dir` instead of the sandbox
/// data directory.
pub fn init_tracing_in(data_dir: &Path, config: &Config) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let log = RotatingLog::new(data_dir.join(LOG_FILE_NAME));
    let layer = fmt::layer()
        .with_writer(log)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
