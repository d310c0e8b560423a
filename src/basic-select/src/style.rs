//! Colors and border set used when drawing a select.
//!
//! Styling never feeds back into the state machine; hosts may swap the
//! whole [`SelectTheme`] freely.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border::Set as BorderSet;

// ============================================================
// PALETTE
// ============================================================

/// Accent for focused borders and the cursor row.
pub const ACCENT: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Popup background.
pub const SURFACE: Color = Color::Rgb(27, 40, 56); // #1B2838

/// Cursor row background.
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(36, 59, 83); // #243B53

/// Primary text.
pub const TEXT: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Placeholder text.
pub const TEXT_MUTED: Color = Color::Rgb(72, 101, 129); // #486581

/// Unfocused borders.
pub const BORDER: Color = Color::Rgb(27, 73, 101); // #1B4965

/// Validation messages.
pub const ERROR: Color = Color::Rgb(255, 107, 107); // #FF6B6B

/// Rounded border character set.
pub const ROUNDED_BORDER: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal_top: "─",
    horizontal_bottom: "─",
    vertical_left: "│",
    vertical_right: "│",
};

/// Styles for each part of a select.
#[derive(Debug, Clone, Copy)]
pub struct SelectTheme {
    /// Root and menu borders while unfocused.
    pub border: Style,
    /// Root border while focus is inside the select.
    pub border_focused: Style,
    /// Label drawn in the root's top border.
    pub label: Style,
    /// Selected display text.
    pub value: Style,
    /// Placeholder text.
    pub placeholder: Style,
    /// Ordinary menu rows.
    pub row: Style,
    /// The cursor row.
    pub cursor_row: Style,
    /// Validation message.
    pub message: Style,
    /// Border glyphs.
    pub border_set: BorderSet<'static>,
}

impl Default for SelectTheme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(BORDER),
            border_focused: Style::default().fg(ACCENT),
            label: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            value: Style::default().fg(TEXT),
            placeholder: Style::default().fg(TEXT_MUTED),
            row: Style::default().fg(TEXT).bg(SURFACE),
            cursor_row: Style::default()
                .fg(ACCENT)
                .bg(SURFACE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
            message: Style::default().fg(ERROR),
            border_set: ROUNDED_BORDER,
        }
    }
}
