//! The option data model.

use serde::{Deserialize, Serialize};

/// One choice offered by the select.
///
/// Options are compared by `value` when resolving selections; `display` is
/// presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifier reported to the host on commit.
    pub value: String,
    /// Text shown in the root and in the menu.
    pub display: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
        }
    }

    /// Returns true if both options carry the same value.
    pub fn same_value(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}

/// Returns the index of the option whose value is `value`.
pub fn position_of(options: &[SelectOption], value: &str) -> Option<usize> {
    options.iter().position(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_value_ignores_display() {
        let a = SelectOption::new("2", "Two");
        let b = SelectOption::new("2", "deux");
        assert!(a.same_value(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_position_of() {
        let options = vec![SelectOption::new("a", "A"), SelectOption::new("b", "B")];
        assert_eq!(position_of(&options, "b"), Some(1));
        assert_eq!(position_of(&options, "z"), None);
        assert_eq!(position_of(&[], "a"), None);
    }
}
