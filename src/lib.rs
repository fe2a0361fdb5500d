//! zelect: a dropdown select widget for terminal UIs, shipped with a Zellij
//! plugin host.
//!
//! The widget supports:
//! - Single selection from a flat option list
//! - Grouped options rendered under group headers
//! - Multi selection with per-item clear controls
//! - Case-insensitive search filtering with a live result count
//! - Clear-all and disabled affordances

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Search filtering                                 │
//! │  - View model computation                           │
//! │  - Builder facade with callbacks                    │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)  │
//! │ - Components          │   │ - Option model          │
//! │ - Hit regions         │   │ - Error types           │
//! │ - Theming             │   │                         │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (infrastructure/) + Observability   │
//! │  - Sandbox paths          - Rotating log file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Widget state machine with event/action model
//! - [`domain`]: Option model and errors
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zelect.wasm" {
//!         options "[\"HTML\", \"CSS\", \"JS\"]"
//!         searchable "true"
//!         clearable "true"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use zelect::{Event, Select};
//!
//! let mut select = Select::builder(["HTML", "CSS", "JS"])
//!     .searchable(true)
//!     .build()?;
//!
//! select.dispatch(&Event::ActivateControl);
//! select.dispatch(&Event::SearchChanged("s".into()));
//! assert_eq!(select.state().compute_viewmodel().control.text, "2 results");
//!
//! select.dispatch(&Event::SelectOption("CSS".into()));
//! assert_eq!(select.value(), Some("CSS"));
//! # Ok::<(), zelect::ZelectError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, Event, MenuState, Select, SelectBuilder, SelectMode, SelectProps,
    SelectState,
};
pub use domain::{OptionGroup, OptionSet, RawOption, Result, ZelectError};
pub use ui::Theme;

use std::collections::BTreeMap;

use domain::options::parse_options;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zelect.wasm" {
///     options "[{\"group\": \"frontend\", \"options\": [\"React.JS\"]}]"
///     grouped "true"
///     placeholder "Pick a framework"
///     theme_file "~/.config/zelect/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Raw `options` value: a JSON array or a comma-separated list.
    ///
    /// Required; [`initialize`] fails without it.
    pub options: Option<String>,

    /// Placeholder text. Default: `"Select Option"`.
    pub placeholder: Option<String>,

    pub clearable: bool,
    pub searchable: bool,
    pub disabled: bool,
    pub grouped: bool,
    pub multi: bool,

    /// Initial single/grouped value.
    pub value: Option<String>,

    /// The host owns the value and syncs it through the `set_value` pipe.
    pub controlled: bool,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - Flags (`clearable`, `searchable`, `disabled`, `grouped`, `multi`,
    ///   `controlled`) are `true` for `true`, `yes`, `1`, or `on`
    ///   (case-insensitive) and `false` otherwise
    /// - Blank string values count as unset
    /// - `theme` maps to `theme_name`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zelect::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("options".to_string(), "HTML,CSS".to_string());
    /// map.insert("multi".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.options.as_deref(), Some("HTML,CSS"));
    /// assert!(config.multi);
    /// assert!(!config.searchable);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let flag = |key: &str| {
            config.get(key).is_some_and(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "true" | "yes" | "1" | "on"
                )
            })
        };

        Self {
            options: text("options"),
            placeholder: text("placeholder"),
            clearable: flag("clearable"),
            searchable: flag("searchable"),
            disabled: flag("disabled"),
            grouped: flag("grouped"),
            multi: flag("multi"),
            value: text("value"),
            controlled: flag("controlled"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Loads the configured theme: file, then built-in name, then default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the widget state described by `config`.
///
/// # Errors
///
/// - [`ZelectError::Configuration`] when `options` is missing or does not fit
///   the mode flags
/// - [`ZelectError::Options`] when `options` is malformed JSON
///
/// # Example
///
/// ```rust
/// use zelect::{initialize, Config};
///
/// let config = Config {
///     options: Some(r#"["HTML", "CSS", "JS"]"#.to_string()),
///     searchable: true,
///     ..Default::default()
/// };
/// let state = initialize(&config)?;
/// assert_eq!(state.options.option_count(), 3);
///
/// assert!(initialize(&Config::default()).is_err());
/// # Ok::<(), zelect::ZelectError>(())
/// ```
pub fn initialize(config: &Config) -> Result<SelectState> {
    tracing::debug!("initializing zelect plugin");

    let raw = config
        .options
        .as_deref()
        .ok_or_else(|| ZelectError::Configuration("options are required".to_string()))?;
    let options = parse_options(raw)?;

    let props = SelectProps {
        options,
        placeholder: config.placeholder.clone(),
        clearable: config.clearable,
        searchable: config.searchable,
        disabled: config.disabled,
        grouped: config.grouped,
        multi: config.multi,
        value: config.value.clone(),
        controlled: config.controlled,
    };

    SelectState::new(props, config.load_theme())
}

/// Reads a `set_value` pipe payload into a controlled value.
///
/// Only the line terminator is stripped, so labels keep their surrounding
/// spaces. An empty payload clears the value.
///
/// ```rust
/// assert_eq!(zelect::sync_payload(" CSS \n"), Some(" CSS ".to_string()));
/// assert_eq!(zelect::sync_payload(""), None);
/// ```
#[must_use]
pub fn sync_payload(payload: &str) -> Option<String> {
    let value = payload
        .strip_suffix('\n')
        .map_or(payload, |rest| rest.strip_suffix('\r').unwrap_or(rest));
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn flags_accept_common_spellings() {
        let config = Config::from_zellij(&map(&[
            ("clearable", "TRUE"),
            ("searchable", "on"),
            ("disabled", "1"),
            ("grouped", "no"),
            ("multi", "nope"),
        ]));
        assert!(config.clearable && config.searchable && config.disabled);
        assert!(!config.grouped && !config.multi);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("value", "  "), ("theme", "")]));
        assert!(config.value.is_none());
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn missing_options_fail_fast() {
        let err = initialize(&Config::default()).unwrap_err();
        assert!(matches!(err, ZelectError::Configuration(_)));
    }

    #[test]
    fn grouped_config_from_json() {
        let config = Config::from_zellij(&map(&[
            (
                "options",
                r#"[{"group":"frontend","options":["React.JS"]},{"group":"backend","options":["Node.JS"]}]"#,
            ),
            ("grouped", "true"),
            ("value", "Node.JS"),
        ]));
        let state = initialize(&config).unwrap();
        assert_eq!(state.mode, SelectMode::Grouped);
        assert_eq!(state.value.as_deref(), Some("Node.JS"));
    }

    #[test]
    fn grouped_flag_with_flat_options_is_rejected() {
        let config = Config::from_zellij(&map(&[("options", "a,b"), ("grouped", "yes")]));
        assert!(matches!(
            initialize(&config),
            Err(ZelectError::Configuration(_))
        ));
    }

    #[test]
    fn theme_resolution_falls_back_to_default() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-latte");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(config.load_theme(), Theme::default());

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(config.load_theme(), Theme::default());
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut custom = Theme::default();
        custom.name = "mine".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Default::default()
        };
        assert_eq!(config.load_theme().name, "mine");
    }

    #[test]
    fn sync_payload_keeps_surrounding_spaces() {
        assert_eq!(sync_payload(" CSS \n"), Some(" CSS ".to_string()));
        assert_eq!(sync_payload("CSS\r\n"), Some("CSS".to_string()));
        assert_eq!(sync_payload("HTML"), Some("HTML".to_string()));
    }

    #[test]
    fn sync_payload_empty_clears() {
        assert_eq!(sync_payload(""), None);
        assert_eq!(sync_payload("\n"), None);
    }
}
