//! Screen regions of a select.
//!
//! The same regions are used to draw a frame and to hit-test the clicks
//! that arrive before the next one, so a click is always judged against
//! what the user actually saw.

use ratatui::layout::{Position, Rect};

/// Height of the bordered root box.
pub const ROOT_HEIGHT: u16 = 3;

/// Default number of menu rows shown before the menu scrolls.
pub const DEFAULT_MAX_MENU_HEIGHT: u16 = 8;

/// Regions of one select for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectLayout {
    /// The always-visible root box.
    pub root: Rect,
    /// The line under the root reserved for a validation message.
    pub message: Rect,
    /// The menu popup, present only when there are rows to show.
    pub menu: Option<Rect>,
    /// Visible rows as `(option index, line)`, top to bottom.
    pub rows: Vec<(usize, Rect)>,
    total: usize,
    offset: usize,
}

impl SelectLayout {
    /// Lays out a select in `area`. `option_count` is the number of rows
    /// the open menu shows; pass 0 while closed.
    pub fn compute(area: Rect, option_count: usize, max_menu_height: u16) -> Self {
        let root = Rect {
            height: ROOT_HEIGHT.min(area.height),
            ..area
        };
        let message = Rect::new(area.x, root.bottom(), area.width, 1).intersection(area);

        let mut layout = Self {
            root,
            message,
            menu: None,
            rows: Vec::new(),
            total: option_count,
            offset: 0,
        };
        if option_count == 0 {
            return layout;
        }

        let visible = option_count.min(usize::from(max_menu_height.max(1)));
        // Two border lines around the rows.
        let wanted = u16::try_from(visible).unwrap_or(u16::MAX).saturating_add(2);
        let menu = Rect::new(area.x, root.bottom(), area.width, wanted).intersection(area);
        if menu.height <= 2 || menu.width <= 2 {
            return layout;
        }
        layout.menu = Some(menu);
        layout.place_rows();
        layout
    }

    /// Restores the scroll offset of a previous frame, clamped to this one.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset.min(self.total.saturating_sub(self.visible()));
        self.place_rows();
        self
    }

    /// Scrolls the menu the least amount that brings `index` into view.
    pub fn scroll_to(&mut self, index: usize) {
        let visible = self.visible();
        if visible == 0 || index >= self.total {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + visible {
            self.offset = index + 1 - visible;
        }
        self.place_rows();
    }

    /// Index of the first visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows the menu can show at once.
    pub fn visible(&self) -> usize {
        self.menu
            .map_or(0, |menu| usize::from(menu.height.saturating_sub(2)))
            .min(self.total)
    }

    /// True when some rows are scrolled out of view.
    pub fn is_scrolled(&self) -> bool {
        self.visible() < self.total
    }

    /// Returns true if `position` is inside the root box.
    pub fn root_contains(&self, position: Position) -> bool {
        self.root.contains(position)
    }

    /// Returns true if `position` is inside the menu popup.
    pub fn menu_contains(&self, position: Position) -> bool {
        self.menu.is_some_and(|menu| menu.contains(position))
    }

    /// Option index of the row under `position`.
    pub fn row_at(&self, position: Position) -> Option<usize> {
        self.rows
            .iter()
            .find(|(_, line)| line.contains(position))
            .map(|(index, _)| *index)
    }

    fn place_rows(&mut self) {
        self.rows.clear();
        let Some(menu) = self.menu else {
            return;
        };
        let inner = Rect::new(
            menu.x + 1,
            menu.y + 1,
            menu.width.saturating_sub(2),
            menu.height.saturating_sub(2),
        );
        let last = (self.offset + self.visible()).min(self.total);
        for (line, index) in (self.offset..last).enumerate() {
            let y = inner.y + line as u16;
            if y >= inner.bottom() {
                break;
            }
            self.rows.push((index, Rect::new(inner.x, y, inner.width, 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_closed_layout_has_no_menu() {
        let layout = SelectLayout::compute(Rect::new(0, 0, 20, 10), 0, 8);
        assert_eq!(layout.root, Rect::new(0, 0, 20, 3));
        assert_eq!(layout.message, Rect::new(0, 3, 20, 1));
        assert_eq!(layout.menu, None);
        assert!(layout.rows.is_empty());
    }

    #[test]
    fn test_menu_below_root() {
        let layout = SelectLayout::compute(Rect::new(2, 1, 20, 10), 3, 8);
        assert_eq!(layout.menu, Some(Rect::new(2, 4, 20, 5)));
        assert_eq!(
            layout.rows,
            vec![
                (0, Rect::new(3, 5, 18, 1)),
                (1, Rect::new(3, 6, 18, 1)),
                (2, Rect::new(3, 7, 18, 1)),
            ]
        );
        assert!(!layout.is_scrolled());
    }

    #[test]
    fn test_hit_testing() {
        let layout = SelectLayout::compute(Rect::new(0, 0, 20, 10), 3, 8);
        assert!(layout.root_contains(Position::new(5, 1)));
        assert!(!layout.root_contains(Position::new(5, 4)));

        assert_eq!(layout.row_at(Position::new(5, 5)), Some(1));
        // Menu border: inside the menu, on no row.
        assert!(layout.menu_contains(Position::new(0, 4)));
        assert_eq!(layout.row_at(Position::new(0, 4)), None);
        assert!(!layout.menu_contains(Position::new(5, 9)));
    }

    #[test]
    fn test_tall_menu_scrolls() {
        let mut layout = SelectLayout::compute(Rect::new(0, 0, 20, 30), 10, 4);
        assert_eq!(layout.visible(), 4);
        assert!(layout.is_scrolled());
        assert_eq!(layout.rows.first().map(|r| r.0), Some(0));

        layout.scroll_to(6);
        assert_eq!(layout.offset(), 3);
        assert_eq!(layout.rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![3, 4, 5, 6]);

        layout.scroll_to(1);
        assert_eq!(layout.offset(), 1);

        layout.scroll_to(42);
        assert_eq!(layout.offset(), 1);
    }

    #[test]
    fn test_offset_carried_between_frames() {
        let area = Rect::new(0, 0, 20, 30);
        let next = SelectLayout::compute(area, 10, 4).with_offset(3);
        assert_eq!(next.rows.first().map(|r| r.0), Some(3));

        let clamped = SelectLayout::compute(area, 5, 4).with_offset(3);
        assert_eq!(clamped.offset(), 1);
    }

    #[test]
    fn test_menu_clipped_by_area() {
        let layout = SelectLayout::compute(Rect::new(0, 0, 20, 6), 10, 8);
        assert_eq!(layout.menu, Some(Rect::new(0, 3, 20, 3)));
        assert_eq!(layout.visible(), 1);
        assert_eq!(layout.rows.len(), 1);
    }

    #[test]
    fn test_no_room_for_menu() {
        let layout = SelectLayout::compute(Rect::new(0, 0, 20, 3), 3, 8);
        assert_eq!(layout.menu, None);
        assert_eq!(layout.message.height, 0);
    }
}
