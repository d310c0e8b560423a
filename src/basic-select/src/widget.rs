//! Drawing a select with ratatui.

use crate::layout::SelectLayout;
use crate::select::Select;
use crate::style::SelectTheme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ARROW_CLOSED: &str = "▼";
const ARROW_OPEN: &str = "▲";
const CHECK: &str = "✓";

/// Renders a [`Select`] into a buffer.
///
/// Regions come from [`Select::compute_layout`], so what is drawn matches
/// what the next [`Select::layout`] call will hit-test.
pub struct SelectWidget<'a> {
    select: &'a Select,
}

impl<'a> SelectWidget<'a> {
    /// Creates a widget for `select`.
    pub fn new(select: &'a Select) -> Self {
        Self { select }
    }

    fn render_root(&self, layout: &SelectLayout, theme: &SelectTheme, buf: &mut Buffer) {
        let select = self.select;
        let border = if select.focus().is_within() {
            theme.border_focused
        } else {
            theme.border
        };
        let mut block = Block::bordered()
            .border_set(theme.border_set)
            .border_style(border);
        if !select.label_text().is_empty() {
            block = block
                .title(format!(" {} ", select.label_text()))
                .title_style(theme.label);
        }
        let inner = block.inner(layout.root);
        block.render(layout.root, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let arrow = if select.is_open() { ARROW_OPEN } else { ARROW_CLOSED };
        let text_width = usize::from(inner.width.saturating_sub(3));
        let (text, style) = match (select.selected(), select.display_text()) {
            (Some(_), Some(text)) => (text, theme.value),
            (None, Some(text)) => (text, theme.placeholder),
            (_, None) => ("", theme.placeholder),
        };
        buf.set_string(
            inner.x + 1,
            inner.y,
            truncate_with_ellipsis(text, text_width),
            style,
        );
        buf.set_string(inner.right().saturating_sub(2), inner.y, arrow, border);
    }

    fn render_message(&self, layout: &SelectLayout, theme: &SelectTheme, buf: &mut Buffer) {
        let Some(message) = self.select.validation_message() else {
            return;
        };
        if layout.message.height == 0 {
            return;
        }
        let text = truncate_with_ellipsis(message, usize::from(layout.message.width));
        buf.set_string(layout.message.x, layout.message.y, text, theme.message);
    }

    fn render_menu(&self, menu: Rect, layout: &SelectLayout, theme: &SelectTheme, buf: &mut Buffer) {
        let select = self.select;
        Clear.render(menu, buf);
        Block::bordered()
            .border_set(theme.border_set)
            .border_style(theme.border_focused)
            .style(theme.row)
            .render(menu, buf);

        let selected = select.selected();
        let cursor = select.focused_index();
        for &(index, line) in &layout.rows {
            let Some(option) = select.options().get(index) else {
                continue;
            };
            let style = if Some(index) == cursor {
                theme.cursor_row
            } else {
                theme.row
            };
            buf.set_style(line, style);

            let mark = if selected.is_some_and(|s| s.same_value(option)) {
                CHECK
            } else {
                " "
            };
            buf.set_string(line.x, line.y, mark, style);
            let width = usize::from(line.width.saturating_sub(2));
            buf.set_string(
                line.x + 2,
                line.y,
                truncate_with_ellipsis(&option.display, width),
                style,
            );
        }

        if layout.is_scrolled() {
            let x = menu.right().saturating_sub(2);
            if layout.offset() > 0 {
                buf.set_string(x, menu.y, ARROW_OPEN, theme.border_focused);
            }
            if layout.offset() + layout.visible() < select.options().len() {
                let y = menu.bottom().saturating_sub(1);
                buf.set_string(x, y, ARROW_CLOSED, theme.border_focused);
            }
        }
    }
}

impl Widget for SelectWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let layout = self.select.compute_layout(area);
        let theme = *self.select.theme();

        self.render_root(&layout, &theme, buf);
        self.render_message(&layout, &theme, buf);
        if let Some(menu) = layout.menu {
            self.render_menu(menu, &layout, &theme, buf);
        }
    }
}

/// Truncates `text` to `max_width` columns, ending in `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}
