//! Host-facing component contract.
//!
//! A host with several focusable controls draws each one through
//! [`Component`], sends keys to whichever has focus, and handles Tab itself
//! unless the focused control prevented it.

use basic_select_input::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// What a component did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T> {
    /// Consumed, no value produced.
    Handled,
    /// Ignored; the host may act on it.
    NotHandled,
    /// A selection was committed.
    Done(T),
    /// The open menu was dismissed without a commit.
    Cancelled,
}

/// Focus as the host sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Not focused.
    #[default]
    Unfocused,
    /// Focused with the menu closed.
    Focused,
    /// Focused with the menu open.
    Editing,
}

impl FocusState {
    /// Returns true for `Focused` and `Editing`.
    pub fn has_focus(self) -> bool {
        self != FocusState::Unfocused
    }
}

/// Interface a host drives each focusable control through.
pub trait Component {
    /// Value carried by [`ComponentResult::Done`].
    type Output;

    /// Draws into `buf`.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Handles a key while focused.
    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    /// Current focus state.
    fn focus_state(&self) -> FocusState;

    /// Gives (`true`) or takes away (`false`) focus.
    fn set_focus(&mut self, focused: bool);

    /// `(key, action)` pairs for a hints bar.
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;

    /// Smallest `(width, height)` that shows the closed control in full.
    fn desired_size(&self) -> (u16, u16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_state_has_focus() {
        assert!(!FocusState::default().has_focus());
        assert!(FocusState::Focused.has_focus());
        assert!(FocusState::Editing.has_focus());
    }
}
