//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zelect library and
//! the Zellij plugin system. It hosts one widget per plugin pane.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the widget state
//! 2. **Subscribe**: Register for `Key`, `Mouse`, and permission events
//! 3. **Update**: Translate input into widget events, forward notifications
//! 4. **Pipe**: Register notification listeners, accept controlled values
//! 5. **Render**: Print the frame and keep it for click resolution
//!
//! # Event Mapping
//!
//! - `Mouse(LeftClick)` → hit test on the last frame → widget event
//! - `Key(Char)` / `Key(Backspace)` → `Event::SearchChanged` with the edited term
//! - `Key(Esc)` → hide the plugin
//!
//! # Pipes
//!
//! - `zellij pipe --name listen`: the CLI stays attached and receives one
//!   JSON line per notification
//! - `zellij pipe --name set_value -- <label>`: pushes a controlled value
//!   (empty payload clears)

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zelect::infrastructure::PipeListeners;
use zelect::ui::{compose_error, Frame};
use zelect::{handle_event, Action, Config, Event, SelectState, Theme};

register_plugin!(State);

/// Pipe name that registers a notification listener.
const LISTEN_PIPE: &str = "listen";

/// Pipe name that pushes a controlled value.
const SET_VALUE_PIPE: &str = "set_value";

/// Plugin state wrapper.
///
/// Wraps the library's `SelectState` with Zellij-specific concerns: the last
/// rendered frame for mouse hit testing and the attached CLI listeners.
#[derive(Default)]
struct State {
    /// Widget state, `None` until loaded or when configuration failed.
    app: Option<SelectState>,

    /// Configuration failure shown instead of the widget.
    config_error: Option<String>,

    /// Theme used for the error panel.
    theme: Theme,

    /// Frame produced by the last render.
    frame: Frame,

    /// CLI pipes waiting for notifications.
    listeners: PipeListeners,
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `ReadCliPipes` to hold `listen` pipes open and write
    /// notifications to them.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zelect::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            grouped = config.grouped,
            multi = config.multi,
            searchable = config.searchable,
            clearable = config.clearable,
            "parsed configuration"
        );

        self.theme = config.load_theme();
        match zelect::initialize(&config) {
            Ok(app) => {
                tracing::info!(mode = ?app.mode, options = app.options.option_count(), "widget ready");
                self.app = Some(app);
            }
            Err(e) => {
                tracing::error!(error = %e, "invalid plugin configuration");
                self.config_error = Some(e.to_string());
            }
        }

        request_permission(&[PermissionType::ReadCliPipes]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::PermissionRequestResult,
        ]);
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update", event_type = %Self::get_event_name(&event));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Mouse(Mouse::LeftClick(line, column)) => {
                match self.map_click(line, column) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Key(ref key) => {
                if key.bare_key == BareKey::Esc {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                    return false;
                }
                match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("pipe permission denied - notifications will not be delivered");
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Handles `zellij pipe` messages.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        tracing::debug!(name = %pipe_message.name, source = ?pipe_message.source, "pipe message");

        match pipe_message.name.as_str() {
            LISTEN_PIPE => {
                if let PipeSource::Cli(pipe_id) = pipe_message.source {
                    block_cli_pipe_input(&pipe_id);
                    let attached = self.listeners.attach(&pipe_id);
                    tracing::debug!(pipe_id = %pipe_id, attached, "listen pipe");
                }
                false
            }
            SET_VALUE_PIPE => {
                let value = pipe_message.payload.as_deref().and_then(zelect::sync_payload);
                let rerender = self.dispatch(&Event::ValueSynced(value));
                if let PipeSource::Cli(pipe_id) = pipe_message.source {
                    unblock_cli_pipe_input(&pipe_id);
                }
                rerender
            }
            other => {
                tracing::debug!(name = %other, "ignoring pipe with unknown name");
                false
            }
        }
    }

    /// Renders the widget, or the configuration error panel.
    fn render(&mut self, rows: usize, cols: usize) {
        self.frame = match (&self.app, &self.config_error) {
            (Some(app), _) => zelect::ui::render(app, rows, cols),
            (None, Some(error)) => {
                let frame = compose_error(error, &self.theme, rows, cols);
                frame.print();
                frame
            }
            (None, None) => Frame::new(cols),
        };
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Resolves a left click through the last rendered frame.
    fn map_click(&self, line: isize, column: usize) -> Option<Event> {
        let line = usize::try_from(line).ok()?;
        let event = self.frame.event_at(line, column);
        tracing::debug!(line, column, event = ?event, "mouse click");
        event
    }

    /// Maps typing to search term edits.
    ///
    /// Only plain characters and backspace are handled; everything else is
    /// ignored.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let app = self.app.as_ref()?;
        if !app.search_visible() {
            return None;
        }

        let mut term = app.search_term.clone();
        match key.bare_key {
            BareKey::Backspace => {
                term.pop()?;
            }
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) && !c.is_control() => {
                term.push(c);
            }
            _ => return None,
        }

        Some(Event::SearchChanged(term))
    }

    /// Applies a widget event and forwards the resulting notifications.
    fn dispatch(&mut self, event: &Event) -> bool {
        let Some(app) = self.app.as_mut() else {
            return false;
        };

        let (should_render, actions) = handle_event(app, event);
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );
        for action in &actions {
            self.execute_action(action);
        }
        should_render
    }

    /// Writes a notification to every attached listener.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match serde_json::to_string(action) {
            Ok(line) => {
                for pipe_id in self.listeners.iter() {
                    cli_pipe_output(pipe_id, &format!("{line}\n"));
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize notification");
            }
        }
    }
}
