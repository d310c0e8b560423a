//! # basic-select
//!
//! A custom-rendered dropdown select for terminal UIs that keeps the
//! keyboard, focus and selection behaviour of a native select control.
//!
//! The host owns only the options and the current value; open/closed state,
//! keyboard focus and the committed selection live inside the widget.
//!
//! ## Quick Start
//!
//! ```
//! use basic_select::prelude::*;
//! use basic_select_input::{Event, KeyCode, KeyEvent, MouseEvent, PropagatedEvent};
//! use ratatui::layout::Rect;
//!
//! let document = Document::new();
//! let props = SelectProps::new(vec![
//!     SelectOption::new("1", "One"),
//!     SelectOption::new("2", "Two"),
//!     SelectOption::new("3", "Three"),
//! ])
//! .placeholder("Pick a number")
//! .on_change(|option| println!("picked {}", option.value));
//!
//! let mut select = Select::new(props, &document);
//! let area = Rect::new(0, 0, 30, 12);
//! select.layout(area);
//!
//! // Click the root to open, then let layout place focus on the first row.
//! select.handle_event(&mut PropagatedEvent::new(Event::Mouse(MouseEvent::click(2, 1))));
//! select.layout(area);
//!
//! // Move down one row and commit it.
//! select.handle_key(KeyEvent::press(KeyCode::Down));
//! let result = select.handle_key(KeyEvent::press(KeyCode::Enter));
//!
//! assert_eq!(result, ComponentResult::Done(SelectOption::new("2", "Two")));
//! assert!(!select.is_open());
//! assert_eq!(document.listener_count(), 0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! terminal event ──► Select::handle_event ──► routing (element / document)
//!                                                   │
//!                                       ControllerInput
//!                                                   ▼
//!                                       InteractionController ──► callbacks
//!                                                   │
//!                        ExternalEventBridge ◄──────┤ is_open
//!                        (ListenerGuard on Document) │
//!                                                   ▼
//!                          projector::project ──► SelectWidget
//! ```
//!
//! - [`controller`]: the state machine and its dispatch table.
//! - [`projector`]: the pure `(options, selected, is_open)` to rows mapping.
//! - [`bridge`]: document listener registration scoped to the open state.
//! - [`layout`] and [`widget`]: regions and drawing.
//! - [`config`]: loading a select from TOML.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bridge;
pub mod component;
pub mod config;
pub mod controller;
pub mod error;
pub mod focus;
pub mod id;
pub mod layout;
pub mod option;
pub mod projector;
pub mod props;
pub mod select;
pub mod style;
pub mod widget;

pub use bridge::{Document, ExternalEventBridge, ListenerGuard, ListenerKind};
pub use component::{Component, ComponentResult, FocusState};
pub use config::SelectConfig;
pub use controller::{ClickTarget, ControllerInput, InteractionController, Outcome, WidgetState};
pub use error::{Result, SelectError};
pub use focus::{FocusDirection, FocusTarget};
pub use id::{ListenerId, WidgetId};
pub use layout::SelectLayout;
pub use option::SelectOption;
pub use projector::{RowView, focus_row, project};
pub use props::SelectProps;
pub use select::Select;
pub use style::SelectTheme;
pub use widget::SelectWidget;

/// Common imports.
pub mod prelude {
    pub use crate::bridge::Document;
    pub use crate::component::{Component, ComponentResult, FocusState};
    pub use crate::config::SelectConfig;
    pub use crate::focus::FocusTarget;
    pub use crate::option::SelectOption;
    pub use crate::props::SelectProps;
    pub use crate::select::Select;
    pub use crate::widget::SelectWidget;
}
