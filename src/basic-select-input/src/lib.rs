//! # basic-select input
//!
//! Normalized terminal input for the `basic-select` widget.
//!
//! - **Keyboard**: crossterm key events become [`KeyEvent`]s; the keys a
//!   selection control cares about are named by [`NamedKey`].
//! - **Mouse**: press/release pairs on one cell become click events via
//!   [`ClickTracker`], so hosts see browser-style clicks.
//! - **Default actions**: [`PropagatedEvent`] carries the `prevent_default`
//!   flag between the widget and its host.
//! - **Reader**: [`InputReader`] owns raw mode and mouse capture.
//!
//! ```
//! use basic_select_input::{Event, KeyCode, KeyEvent, NamedKey, PropagatedEvent, PropagatingEvent};
//!
//! let mut event = PropagatedEvent::new(Event::Key(KeyEvent::press(KeyCode::Tab)));
//! assert_eq!(event.as_key().map(KeyEvent::named), Some(NamedKey::Tab));
//!
//! event.prevent_default();
//! assert!(event.is_default_prevented());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod event;
pub mod keyboard;
pub mod mouse;
pub mod reader;

pub use event::{Event, PropagatedEvent, PropagatingEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, NamedKey};
pub use mouse::{ClickTracker, MouseButton, MouseEvent, MouseEventKind};
pub use reader::{InputError, InputReader, InputReaderConfig, InputResult};

/// Common imports.
pub mod prelude {
    pub use crate::event::{Event, PropagatedEvent, PropagatingEvent};
    pub use crate::keyboard::{KeyCode, KeyEvent, KeyModifiers, NamedKey};
    pub use crate::mouse::{MouseButton, MouseEvent, MouseEventKind};
}
