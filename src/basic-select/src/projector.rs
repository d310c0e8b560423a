//! Option list projection.
//!
//! A pure mapping from `(options, selected, is_open)` to the rows the
//! presentation layer draws. Nothing here is stored between frames.

use crate::option::{SelectOption, position_of};

/// One renderable menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    /// Position in the option list.
    pub index: usize,
    /// The option shown on this row.
    pub option: &'a SelectOption,
    /// Whether this row is the one that receives focus when the menu opens.
    pub has_focus: bool,
}

/// Index of the row that takes focus when the menu opens: the row matching
/// the selection, else the first row. `None` only for an empty list.
pub fn focus_row(options: &[SelectOption], selected: Option<&SelectOption>) -> Option<usize> {
    if options.is_empty() {
        return None;
    }
    selected
        .and_then(|selected| position_of(options, &selected.value))
        .or(Some(0))
}

/// Projects the visible rows. Empty when closed or when there are no
/// options, in which case no menu is drawn at all.
pub fn project<'a>(
    options: &'a [SelectOption],
    selected: Option<&SelectOption>,
    is_open: bool,
) -> Vec<RowView<'a>> {
    if !is_open {
        return Vec::new();
    }
    let Some(focused) = focus_row(options, selected) else {
        return Vec::new();
    };

    options
        .iter()
        .enumerate()
        .map(|(index, option)| RowView {
            index,
            option,
            has_focus: index == focused,
        })
        .collect()
}
