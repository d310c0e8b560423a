//! Keyboard focus placement inside the widget.
//!
//! The terminal has no DOM, so the widget tracks which of its own elements
//! holds keyboard focus. Row focus is an explicit index into the options,
//! moved one step at a time and clamped at both ends.

use std::fmt;

/// Where keyboard focus currently sits, relative to one select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Focus is on some other control of the host.
    #[default]
    Outside,
    /// The always-visible root element.
    Root,
    /// Row `i` of the open menu.
    Row(usize),
    /// The focused row disappeared and nothing inside the widget took over;
    /// focus fell back to the document body.
    Document,
}

impl FocusTarget {
    /// Returns true if focus is on the root or one of its rows.
    pub fn is_within(self) -> bool {
        matches!(self, FocusTarget::Root | FocusTarget::Row(_))
    }

    /// Returns the focused row index, if a row is focused.
    pub fn row(self) -> Option<usize> {
        match self {
            FocusTarget::Row(index) => Some(index),
            _ => None,
        }
    }
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusTarget::Outside => write!(f, "outside"),
            FocusTarget::Root => write!(f, "root"),
            FocusTarget::Row(index) => write!(f, "row({index})"),
            FocusTarget::Document => write!(f, "document"),
        }
    }
}

/// Direction of a focus step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Towards the end of the list (ArrowDown).
    Forward,
    /// Towards the start of the list (ArrowUp).
    Backward,
}

/// Returns the neighbour of `index` in a list of `len` rows, or `None` at
/// the boundary.
pub fn neighbour(index: usize, len: usize, direction: FocusDirection) -> Option<usize> {
    match direction {
        FocusDirection::Forward => index.checked_add(1).filter(|next| *next < len),
        FocusDirection::Backward => index.checked_sub(1).filter(|prev| *prev < len),
    }
}
