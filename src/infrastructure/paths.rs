//! Path handling for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

/// Returns the plugin data directory, `/host/.local/share/zellij/zelect`.
///
/// `/host` points at the directory Zellij was started from (usually the
/// user's home), so this typically lands in `~/.local/share/zellij/zelect`.
/// The log file lives here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zelect")
}

/// Maps `~`-prefixed paths onto the sandbox's `/host` mount.
///
/// ```
/// use zelect::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zelect.toml"), "/etc/zelect.toml");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
