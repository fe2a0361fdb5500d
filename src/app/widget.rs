//! Builder-style facade for embedding the widget in a Rust host.
//!
//! [`Select`] owns a [`SelectState`] plus the host's callback hooks. Each call
//! to [`Select::dispatch`] runs the reducer and then invokes the hooks for the
//! returned actions, in order, so hooks always observe the already-updated
//! state.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zelect::app::{Event, Select};
//!
//! let picked = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&picked);
//!
//! let mut select = Select::builder(["HTML", "CSS", "JS"])
//!     .multi(true)
//!     .on_selection_change(move |values| sink.borrow_mut().push(values.to_vec()))
//!     .build()?;
//!
//! select.dispatch(&Event::ActivateControl);
//! select.dispatch(&Event::SelectOption("JS".into()));
//! assert_eq!(picked.borrow().last().unwrap(), &vec!["JS".to_string()]);
//! # Ok::<(), zelect::ZelectError>(())
//! ```

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::state::{SelectProps, SelectState};
use crate::domain::{RawOption, Result};
use crate::ui::frame::Frame;
use crate::ui::renderer::compose;
use crate::ui::theme::Theme;

type ChangeHook = Box<dyn FnMut(Option<&str>)>;
type SelectionHook = Box<dyn FnMut(&[String])>;
type MenuOpenHook = Box<dyn FnMut()>;
type SearchHook = Box<dyn FnMut(&str)>;

#[derive(Default)]
struct Hooks {
    on_change: Option<ChangeHook>,
    on_selection_change: Option<SelectionHook>,
    on_menu_open: Option<MenuOpenHook>,
    on_search: Option<SearchHook>,
}

impl Hooks {
    fn fire(&mut self, action: &Action) {
        match action {
            Action::MenuOpened => {
                if let Some(hook) = &mut self.on_menu_open {
                    hook();
                }
            }
            Action::ValueChanged { value } => {
                if let Some(hook) = &mut self.on_change {
                    hook(value.as_deref());
                }
            }
            Action::SelectionChanged { values } => {
                if let Some(hook) = &mut self.on_selection_change {
                    hook(values.as_slice());
                }
            }
            Action::SearchChanged { term } => {
                if let Some(hook) = &mut self.on_search {
                    hook(term.as_str());
                }
            }
        }
    }
}

/// Builder for [`Select`] widgets.
pub struct SelectBuilder {
    props: SelectProps,
    theme: Theme,
    hooks: Hooks,
}

impl SelectBuilder {
    /// Set placeholder text shown when nothing is selected
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.props.placeholder = Some(text.into());
        self
    }

    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.props.clearable = clearable;
        self
    }

    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.props.searchable = searchable;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Render grouped options. Takes precedence over [`multi`](Self::multi).
    #[must_use]
    pub fn grouped(mut self, grouped: bool) -> Self {
        self.props.grouped = grouped;
        self
    }

    #[must_use]
    pub fn multi(mut self, multi: bool) -> Self {
        self.props.multi = multi;
        self
    }

    /// Initial single/grouped value
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.props.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the single/grouped change callback.
    ///
    /// Installing it makes the widget controlled: selections are reported
    /// here and only take effect once the host calls [`Select::sync_value`].
    #[must_use]
    pub fn on_change(mut self, hook: impl FnMut(Option<&str>) + 'static) -> Self {
        self.props.controlled = true;
        self.hooks.on_change = Some(Box::new(hook));
        self
    }

    /// Set the multi selection callback
    #[must_use]
    pub fn on_selection_change(mut self, hook: impl FnMut(&[String]) + 'static) -> Self {
        self.hooks.on_selection_change = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_menu_open(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_menu_open = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_search(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.hooks.on_search = Some(Box::new(hook));
        self
    }

    /// Validates the options and creates the widget.
    ///
    /// # Errors
    ///
    /// Returns [`ZelectError::Configuration`](crate::ZelectError::Configuration)
    /// when the options do not fit the mode flags.
    pub fn build(self) -> Result<Select> {
        Ok(Select {
            state: SelectState::new(self.props, self.theme)?,
            hooks: self.hooks,
        })
    }
}

/// A select widget with host callbacks attached.
pub struct Select {
    state: SelectState,
    hooks: Hooks,
}

impl Select {
    /// Starts a builder over `options`.
    pub fn builder<I, O>(options: I) -> SelectBuilder
    where
        I: IntoIterator<Item = O>,
        O: Into<RawOption>,
    {
        SelectBuilder {
            props: SelectProps {
                options: options.into_iter().map(Into::into).collect(),
                ..SelectProps::default()
            },
            theme: Theme::default(),
            hooks: Hooks::default(),
        }
    }

    /// Applies `event`, then fires the hooks for the resulting actions.
    ///
    /// Returns `true` when the widget should be redrawn.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.state, event);
        for action in &actions {
            self.hooks.fire(action);
        }
        should_render
    }

    /// Pushes a host-owned value into a controlled widget.
    pub fn sync_value(&mut self, value: Option<&str>) -> bool {
        self.dispatch(&Event::ValueSynced(value.map(str::to_string)))
    }

    #[must_use]
    pub const fn state(&self) -> &SelectState {
        &self.state
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.state.value.as_deref()
    }

    /// Multi selection in pick order.
    #[must_use]
    pub fn selected(&self) -> Vec<String> {
        self.state.selected_values()
    }

    /// Builds the frame for a `rows` × `cols` area.
    #[must_use]
    pub fn frame(&self, rows: usize, cols: usize) -> Frame {
        compose(&self.state, rows, cols)
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
