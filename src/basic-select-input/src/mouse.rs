//! Mouse input types and click synthesis.
//!
//! Terminals report button presses and releases separately. A *click* in the
//! browser sense only exists once the release lands where the press began,
//! which is what [`ClickTracker`] reconstructs.

use crate::keyboard::KeyModifiers;
use std::fmt;

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Primary button.
    #[default]
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
            MouseButton::Middle => write!(f, "middle"),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        match btn {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// A button went down.
    Down(MouseButton),
    /// A button came up.
    Up(MouseButton),
    /// The pointer moved while a button was held.
    Drag(MouseButton),
    /// The pointer moved with no button held.
    Moved,
    /// Wheel scrolled down.
    ScrollDown,
    /// Wheel scrolled up.
    ScrollUp,
    /// A complete press/release pair on one cell, produced by [`ClickTracker`].
    Click(MouseButton),
}

impl MouseEventKind {
    /// Returns true if this is a synthesized click of the primary button.
    #[must_use]
    pub fn is_primary_click(&self) -> bool {
        matches!(self, MouseEventKind::Click(MouseButton::Left))
    }
}

impl fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseEventKind::Down(btn) => write!(f, "down({btn})"),
            MouseEventKind::Up(btn) => write!(f, "up({btn})"),
            MouseEventKind::Drag(btn) => write!(f, "drag({btn})"),
            MouseEventKind::Moved => write!(f, "moved"),
            MouseEventKind::ScrollDown => write!(f, "scroll_down"),
            MouseEventKind::ScrollUp => write!(f, "scroll_up"),
            MouseEventKind::Click(btn) => write!(f, "click({btn})"),
        }
    }
}

impl From<crossterm::event::MouseEventKind> for MouseEventKind {
    fn from(kind: crossterm::event::MouseEventKind) -> Self {
        use crossterm::event::MouseEventKind as CT;
        match kind {
            CT::Down(btn) => MouseEventKind::Down(btn.into()),
            CT::Up(btn) => MouseEventKind::Up(btn.into()),
            CT::Drag(btn) => MouseEventKind::Drag(btn.into()),
            CT::Moved => MouseEventKind::Moved,
            CT::ScrollDown | CT::ScrollRight => MouseEventKind::ScrollDown,
            CT::ScrollUp | CT::ScrollLeft => MouseEventKind::ScrollUp,
        }
    }
}

/// A normalized mouse event at a terminal cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// What happened.
    pub kind: MouseEventKind,
    /// Column of the cell under the pointer.
    pub column: u16,
    /// Row of the cell under the pointer.
    pub row: u16,
    /// Modifiers held during the event.
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    /// Creates a mouse event.
    #[must_use]
    pub fn new(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> Self {
        Self {
            kind,
            column,
            row,
            modifiers,
        }
    }

    /// Creates an unmodified primary-button click, as a host or test would
    /// dispatch it directly.
    #[must_use]
    pub fn click(column: u16, row: u16) -> Self {
        Self::new(
            MouseEventKind::Click(MouseButton::Left),
            column,
            row,
            KeyModifiers::NONE,
        )
    }

    /// Creates an unmodified button-down event.
    #[must_use]
    pub fn down(button: MouseButton, column: u16, row: u16) -> Self {
        Self::new(MouseEventKind::Down(button), column, row, KeyModifiers::NONE)
    }

    /// Creates an unmodified button-up event.
    #[must_use]
    pub fn up(button: MouseButton, column: u16, row: u16) -> Self {
        Self::new(MouseEventKind::Up(button), column, row, KeyModifiers::NONE)
    }

    /// Returns `(column, row)`.
    #[must_use]
    pub fn position(&self) -> (u16, u16) {
        (self.column, self.row)
    }
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({},{})", self.kind, self.column, self.row)
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(event: crossterm::event::MouseEvent) -> Self {
        Self {
            kind: event.kind.into(),
            column: event.column,
            row: event.row,
            modifiers: event.modifiers.into(),
        }
    }
}

/// Turns press/release pairs into click events.
///
/// A click is emitted when a button is released on the same cell it was
/// pressed on. Dragging away and back still counts, matching what a
/// browser reports for a pointer that never left the target.
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    pressed: Option<(MouseButton, u16, u16)>,
}

impl ClickTracker {
    /// Creates a tracker with no button held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw event; returns the synthesized click, if this event
    /// completed one.
    pub fn update(&mut self, event: &MouseEvent) -> Option<MouseEvent> {
        match event.kind {
            MouseEventKind::Down(button) => {
                self.pressed = Some((button, event.column, event.row));
                None
            }
            MouseEventKind::Up(button) => match self.pressed.take() {
                Some((pressed, column, row))
                    if pressed == button && column == event.column && row == event.row =>
                {
                    Some(MouseEvent::new(
                        MouseEventKind::Click(button),
                        column,
                        row,
                        event.modifiers,
                    ))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns true while a button is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    /// Forgets any held button.
    pub fn reset(&mut self) {
        self.pressed = None;
    }
}
