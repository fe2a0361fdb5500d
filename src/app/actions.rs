//! Notifications emitted by the event handler for the host to act on.
//!
//! This module defines the [`Action`] type. Actions are produced by
//! [`handle_event`](super::handle_event) after the widget has updated its own
//! state, and are executed afterwards by whoever hosts the widget: the
//! [`Select`](super::Select) facade turns them into callback invocations, the
//! Zellij plugin writes them to a CLI pipe.
//!
//! Actions serialize as tagged JSON objects:
//!
//! ```json
//! {"event":"value_changed","value":"CSS"}
//! {"event":"selection_changed","values":["HTML","JS"]}
//! {"event":"menu_opened"}
//! {"event":"search_changed","term":"h"}
//! ```

use serde::Serialize;

/// Host notifications produced by a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Action {
    /// The menu went from closed to open.
    MenuOpened,

    /// The single/grouped value was selected or cleared.
    ///
    /// For a controlled widget this is a request: the widget has not stored
    /// the value and waits for the host to sync it back.
    ValueChanged {
        /// The new value, `None` when cleared.
        value: Option<String>,
    },

    /// The multi-select set changed.
    SelectionChanged {
        /// Selected labels in the order they were picked.
        values: Vec<String>,
    },

    /// The search term changed on a keystroke.
    SearchChanged {
        /// The full current search term.
        term: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_event_tag() {
        let json = serde_json::to_string(&Action::ValueChanged {
            value: Some("CSS".to_string()),
        })
        .unwrap();
        assert_eq!(json, r#"{"event":"value_changed","value":"CSS"}"#);

        let json = serde_json::to_string(&Action::MenuOpened).unwrap();
        assert_eq!(json, r#"{"event":"menu_opened"}"#);
    }
}
