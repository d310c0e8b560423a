//! Normalized terminal events and propagation control.

use crate::keyboard::KeyEvent;
use crate::mouse::MouseEvent;
use std::fmt;

/// Any input event the terminal can deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// The terminal was resized to `(width, height)`.
    Resize(u16, u16),
    /// Text arrived through bracketed paste.
    Paste(String),
    /// The terminal window gained (`true`) or lost (`false`) focus.
    Focus(bool),
}

impl Event {
    /// Returns the key event if this is a `Key` variant.
    #[must_use]
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the mouse event if this is a `Mouse` variant.
    #[must_use]
    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Event::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }

    /// Returns true for key presses and repeats.
    #[must_use]
    pub fn is_key_down(&self) -> bool {
        self.as_key().is_some_and(KeyEvent::is_key_down)
    }

    /// Returns true for synthesized primary-button clicks.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.as_mouse().is_some_and(|m| m.kind.is_primary_click())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Key(key) => write!(f, "Key({key})"),
            Event::Mouse(mouse) => write!(f, "Mouse({mouse})"),
            Event::Resize(w, h) => write!(f, "Resize({w}x{h})"),
            Event::Paste(text) => write!(f, "Paste({} bytes)", text.len()),
            Event::Focus(true) => write!(f, "Focus(gained)"),
            Event::Focus(false) => write!(f, "Focus(lost)"),
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Event::Key(event)
    }
}

impl From<MouseEvent> for Event {
    fn from(event: MouseEvent) -> Self {
        Event::Mouse(event)
    }
}

impl From<crossterm::event::Event> for Event {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(key) => Event::Key(key.into()),
            crossterm::event::Event::Mouse(mouse) => Event::Mouse(mouse.into()),
            crossterm::event::Event::Resize(w, h) => Event::Resize(w, h),
            crossterm::event::Event::Paste(text) => Event::Paste(text),
            crossterm::event::Event::FocusGained => Event::Focus(true),
            crossterm::event::Event::FocusLost => Event::Focus(false),
        }
    }
}

/// Default-action control for events shared between the widget and its
/// host, modelled on DOM events.
pub trait PropagatingEvent {
    /// Suppresses the host's default action (e.g. Tab focus traversal).
    fn prevent_default(&mut self);

    /// Returns true if the default action has been suppressed.
    fn is_default_prevented(&self) -> bool;
}

/// Wraps an event with its default-prevented flag.
#[derive(Debug, Clone)]
pub struct PropagatedEvent<T> {
    /// The wrapped event.
    pub event: T,
    default_prevented: bool,
}

impl<T> PropagatedEvent<T> {
    /// Wraps `event` with the default action allowed.
    #[must_use]
    pub fn new(event: T) -> Self {
        Self {
            event,
            default_prevented: false,
        }
    }
}

impl<T> PropagatingEvent for PropagatedEvent<T> {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl<T> std::ops::Deref for PropagatedEvent<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyCode;

    #[test]
    fn test_event_predicates() {
        let down = Event::Key(KeyEvent::press(KeyCode::Down));
        assert!(down.is_key_down());
        assert!(!down.is_click());

        let click = Event::Mouse(MouseEvent::click(1, 1));
        assert!(click.is_click());
        assert!(!click.is_key_down());
        assert!(!Event::Resize(80, 24).is_key_down());
    }

    #[test]
    fn test_display() {
        assert_eq!(Event::Resize(80, 24).to_string(), "Resize(80x24)");
        assert_eq!(Event::Focus(false).to_string(), "Focus(lost)");
        assert_eq!(
            Event::Key(KeyEvent::press(KeyCode::Tab)).to_string(),
            "Key(tab)"
        );
    }

    #[test]
    fn test_prevent_default_flag() {
        let mut event = PropagatedEvent::new(Event::Key(KeyEvent::press(KeyCode::Tab)));
        assert!(!event.is_default_prevented());

        event.prevent_default();
        assert!(event.is_default_prevented());
        assert!(event.is_key_down());
    }

    #[test]
    fn test_from_crossterm_focus() {
        assert_eq!(
            Event::from(crossterm::event::Event::FocusLost),
            Event::Focus(false)
        );
    }
}
