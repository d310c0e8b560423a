//! Keyboard input types.
//!
//! Raw crossterm key events are normalized into [`KeyEvent`], and the handful
//! of keys a selection control reacts to are named by [`NamedKey`].

use bitflags::bitflags;
use std::fmt;

/// Whether a key went down, auto-repeated, or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed down.
    #[default]
    Press,
    /// Key is held down and the terminal is repeating it.
    Repeat,
    /// Key was released (only reported by terminals with the Kitty protocol).
    Release,
}

impl From<crossterm::event::KeyEventKind> for KeyEventKind {
    fn from(kind: crossterm::event::KeyEventKind) -> Self {
        match kind {
            crossterm::event::KeyEventKind::Press => KeyEventKind::Press,
            crossterm::event::KeyEventKind::Repeat => KeyEventKind::Repeat,
            crossterm::event::KeyEventKind::Release => KeyEventKind::Release,
        }
    }
}

/// A physical or logical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Delete key.
    Delete,
    /// Function key F1-F24.
    F(u8),
    /// A printable character, including `' '` for the space bar.
    Char(char),
    /// Escape key.
    Esc,
    /// Anything the terminal reports that we have no name for.
    Null,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "f{n}"),
            KeyCode::Esc => f.write_str("escape"),
            other => f.write_str(&format!("{other:?}").to_lowercase()),
        }
    }
}

impl From<crossterm::event::KeyCode> for KeyCode {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as CT;
        match code {
            CT::Backspace => KeyCode::Backspace,
            CT::Enter => KeyCode::Enter,
            CT::Left => KeyCode::Left,
            CT::Right => KeyCode::Right,
            CT::Up => KeyCode::Up,
            CT::Down => KeyCode::Down,
            CT::Home => KeyCode::Home,
            CT::End => KeyCode::End,
            CT::PageUp => KeyCode::PageUp,
            CT::PageDown => KeyCode::PageDown,
            CT::Tab => KeyCode::Tab,
            CT::BackTab => KeyCode::BackTab,
            CT::Delete => KeyCode::Delete,
            CT::F(n) => KeyCode::F(n),
            CT::Char(c) => KeyCode::Char(c),
            CT::Esc => KeyCode::Esc,
            _ => KeyCode::Null,
        }
    }
}

bitflags! {
    /// Modifier keys held during a key or mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// No modifiers pressed.
        const NONE = 0b0000_0000;
        /// Shift modifier.
        const SHIFT = 0b0000_0001;
        /// Control modifier.
        const CONTROL = 0b0000_0010;
        /// Alt/Option modifier.
        const ALT = 0b0000_0100;
        /// Super/Windows/Command modifier.
        const SUPER = 0b0000_1000;
    }
}

impl fmt::Display for KeyModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

impl From<crossterm::event::KeyModifiers> for KeyModifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers as CT;
        let mut result = KeyModifiers::NONE;
        for (theirs, ours) in [
            (CT::SHIFT, KeyModifiers::SHIFT),
            (CT::CONTROL, KeyModifiers::CONTROL),
            (CT::ALT, KeyModifiers::ALT),
            (CT::SUPER, KeyModifiers::SUPER),
        ] {
            if mods.contains(theirs) {
                result |= ours;
            }
        }
        result
    }
}

/// A normalized keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key.
    pub code: KeyCode,
    /// Modifiers held while the key was pressed.
    pub modifiers: KeyModifiers,
    /// Press, repeat or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Creates a press event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            kind: KeyEventKind::Press,
        }
    }

    /// Creates an event of the given kind.
    #[must_use]
    pub fn with_kind(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Self {
        Self {
            code,
            modifiers,
            kind,
        }
    }

    /// Creates an unmodified press of `code`.
    #[must_use]
    pub fn press(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Returns true for presses and auto-repeats, the events a browser
    /// would report as `keydown`.
    #[must_use]
    pub fn is_key_down(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }

    /// Returns the named key this event maps to.
    #[must_use]
    pub fn named(&self) -> NamedKey {
        NamedKey::from(self.code)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}+{}", self.modifiers, self.code)
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            code: event.code.into(),
            modifiers: event.modifiers.into(),
            kind: event.kind.into(),
        }
    }
}

/// The keys a selection control gives meaning to.
///
/// Everything else collapses into [`NamedKey::Other`], so a dispatch table
/// over `NamedKey` is exhaustive without a catch-all on raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// The space bar.
    Space,
    /// Enter/Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Any other key.
    Other,
}

impl NamedKey {
    /// Space and Enter open a closed control and activate a focused row.
    #[must_use]
    pub fn is_toggle(self) -> bool {
        matches!(self, NamedKey::Space | NamedKey::Enter)
    }

    /// Returns true for Tab and Shift+Tab.
    #[must_use]
    pub fn is_tab(self) -> bool {
        matches!(self, NamedKey::Tab | NamedKey::BackTab)
    }
}

impl From<KeyCode> for NamedKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(' ') => NamedKey::Space,
            KeyCode::Enter => NamedKey::Enter,
            KeyCode::Esc => NamedKey::Escape,
            KeyCode::Tab => NamedKey::Tab,
            KeyCode::BackTab => NamedKey::BackTab,
            KeyCode::Up => NamedKey::ArrowUp,
            KeyCode::Down => NamedKey::ArrowDown,
            _ => NamedKey::Other,
        }
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamedKey::Space => "Space",
            NamedKey::Enter => "Enter",
            NamedKey::Escape => "Escape",
            NamedKey::Tab => "Tab",
            NamedKey::BackTab => "BackTab",
            NamedKey::ArrowUp => "ArrowUp",
            NamedKey::ArrowDown => "ArrowDown",
            NamedKey::Other => "Other",
        };
        f.write_str(name)
    }
}
