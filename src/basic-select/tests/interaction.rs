//! End-to-end interaction scenarios driven through `Select`.

use basic_select::prelude::*;
use basic_select_input::{Event, KeyCode, KeyEvent, MouseEvent, PropagatedEvent, PropagatingEvent};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 24,
    height: 12,
};

/// A cell inside the root box.
const ROOT: (u16, u16) = (3, 1);
/// A cell below the menu.
const OUTSIDE: (u16, u16) = (3, 11);

struct Harness {
    document: Document,
    select: Select,
    changes: Rc<RefCell<Vec<SelectOption>>>,
    blurs: Rc<RefCell<usize>>,
    key_downs: Rc<RefCell<usize>>,
}

impl Harness {
    fn new(options: Vec<SelectOption>, value: Option<&str>) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let blurs = Rc::new(RefCell::new(0));
        let key_downs = Rc::new(RefCell::new(0));

        let mut props = SelectProps::new(options)
            .placeholder("Choose")
            .on_change({
                let changes = Rc::clone(&changes);
                move |option| changes.borrow_mut().push(option.clone())
            })
            .on_blur({
                let blurs = Rc::clone(&blurs);
                move || *blurs.borrow_mut() += 1
            })
            .on_key_down({
                let key_downs = Rc::clone(&key_downs);
                move || *key_downs.borrow_mut() += 1
            });
        if let Some(value) = value {
            props = props.value(value);
        }

        let document = Document::new();
        let mut select = Select::new(props, &document);
        select.layout(AREA);
        Self {
            document,
            select,
            changes,
            blurs,
            key_downs,
        }
    }

    fn numbers() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "1"),
            SelectOption::new("2", "2"),
            SelectOption::new("3", "3"),
        ]
    }

    fn click(&mut self, (column, row): (u16, u16)) -> ComponentResult<SelectOption> {
        let mut event = PropagatedEvent::new(Event::Mouse(MouseEvent::click(column, row)));
        let result = self.select.handle_event(&mut event);
        self.select.layout(AREA);
        result
    }

    fn key(&mut self, code: KeyCode) -> ComponentResult<SelectOption> {
        let result = self.select.handle_key(KeyEvent::press(code));
        self.select.layout(AREA);
        result
    }

    fn click_row(&mut self, index: usize) -> ComponentResult<SelectOption> {
        let (_, line) = self
            .select
            .last_layout()
            .and_then(|layout| layout.rows.iter().find(|(i, _)| *i == index).copied())
            .expect("row is laid out");
        self.click((line.x + 1, line.y))
    }

    fn selected_value(&self) -> Option<String> {
        self.select.selected().map(|option| option.value.clone())
    }
}

#[test_log::test]
fn controlled_value_is_idempotent() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.select.set_value(Some("2"));
    h.click(ROOT);
    let before = (h.select.is_open(), h.select.focused_index());

    h.select.set_value(Some("2"));
    h.select.set_value(Some("2"));

    assert_eq!((h.select.is_open(), h.select.focused_index()), before);
    assert_eq!(before, (true, Some(1)));
}

#[test_log::test]
fn click_opens_and_outside_click_closes() {
    let mut h = Harness::new(Harness::numbers(), None);
    assert!(!h.select.is_open());

    assert_eq!(h.click(ROOT), ComponentResult::Handled);
    assert!(h.select.is_open());

    assert_eq!(h.click(OUTSIDE), ComponentResult::Cancelled);
    assert!(!h.select.is_open());
    assert!(h.changes.borrow().is_empty());
}

#[test_log::test]
fn activating_a_row_commits_once() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.click(ROOT);

    let result = h.click_row(1);

    assert_eq!(result, ComponentResult::Done(SelectOption::new("2", "2")));
    assert_eq!(h.selected_value().as_deref(), Some("2"));
    assert!(!h.select.is_open());
    assert_eq!(*h.changes.borrow(), vec![SelectOption::new("2", "2")]);
    assert_eq!(h.select.focus(), FocusTarget::Root);
}

#[test_log::test]
fn keyboard_commit_from_root() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.select.set_focus(true);

    h.key(KeyCode::Char(' '));
    h.key(KeyCode::Down);
    h.key(KeyCode::Down);
    let result = h.key(KeyCode::Enter);

    assert_eq!(result, ComponentResult::Done(SelectOption::new("3", "3")));
    assert_eq!(h.changes.borrow().len(), 1);
}

#[test_log::test]
fn opening_focuses_selected_or_first_row() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.click(ROOT);
    assert_eq!(h.select.focus(), FocusTarget::Row(0));
    let focused: Vec<usize> = h
        .select
        .rows()
        .iter()
        .filter(|row| row.has_focus)
        .map(|row| row.index)
        .collect();
    assert_eq!(focused, vec![0]);

    h.click_row(1);
    h.click(ROOT);
    assert_eq!(h.select.focus(), FocusTarget::Row(1));
    let focused: Vec<usize> = h
        .select
        .rows()
        .iter()
        .filter(|row| row.has_focus)
        .map(|row| row.index)
        .collect();
    assert_eq!(focused, vec![1]);
}

#[test_log::test]
fn arrow_down_stops_at_last_row() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.click(ROOT);
    assert_eq!(h.select.focus(), FocusTarget::Row(0));

    h.key(KeyCode::Down);
    assert_eq!(h.select.focus(), FocusTarget::Row(1));

    h.key(KeyCode::Down);
    h.key(KeyCode::Down);
    assert_eq!(h.select.focus(), FocusTarget::Row(2));
    assert_eq!(h.select.focused_index(), Some(2));
    assert!(h.select.is_open());
}

#[test_log::test]
fn escape_discards() {
    let mut h = Harness::new(Harness::numbers(), Some("3"));
    h.click(ROOT);
    h.key(KeyCode::Up);
    assert_eq!(h.select.focus(), FocusTarget::Row(1));

    assert_eq!(h.key(KeyCode::Esc), ComponentResult::Cancelled);

    assert!(!h.select.is_open());
    assert_eq!(h.selected_value().as_deref(), Some("3"));
    assert!(h.changes.borrow().is_empty());
    assert_eq!(h.select.focus(), FocusTarget::Root);
}

#[test_log::test]
fn empty_options_never_project_rows() {
    let mut h = Harness::new(Vec::new(), Some("1"));
    assert_eq!(h.select.display_text(), Some("Choose"));

    h.click(ROOT);
    assert!(h.select.rows().is_empty());
    assert!(h.select.last_layout().is_some_and(|layout| layout.menu.is_none()));

    h.key(KeyCode::Enter);
    h.key(KeyCode::Down);
    assert!(h.select.rows().is_empty());
    assert!(h.changes.borrow().is_empty());
}

#[test_log::test]
fn listeners_released_on_every_exit_path() {
    let mut h = Harness::new(Harness::numbers(), None);

    h.click(ROOT);
    assert_eq!(h.document.listener_count(), 2);
    h.click(OUTSIDE);
    assert_eq!(h.document.listener_count(), 0);

    h.click(ROOT);
    h.key(KeyCode::Esc);
    assert_eq!(h.document.listener_count(), 0);

    h.click(ROOT);
    h.click_row(0);
    assert_eq!(h.document.listener_count(), 0);

    h.click(ROOT);
    assert_eq!(h.document.listener_count(), 2);
    let document = h.document.clone();
    drop(h);
    assert_eq!(document.listener_count(), 0);
}

#[test_log::test]
fn closed_select_ignores_document_traffic() {
    let mut h = Harness::new(Harness::numbers(), None);

    assert_eq!(h.click(OUTSIDE), ComponentResult::NotHandled);
    assert_eq!(h.key(KeyCode::Esc), ComponentResult::NotHandled);
    assert_eq!(*h.key_downs.borrow(), 0);
}

#[test_log::test]
fn tab_is_trapped_while_open() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.click(ROOT);

    let mut tab = PropagatedEvent::new(Event::Key(KeyEvent::press(KeyCode::Tab)));
    h.select.handle_event(&mut tab);

    assert!(tab.is_default_prevented());
    assert!(h.select.is_open());
    assert_eq!(h.select.focus(), FocusTarget::Row(0));
}

#[test_log::test]
fn key_down_reported_for_each_open_keydown() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.click(ROOT);

    h.key(KeyCode::Down);
    h.key(KeyCode::Char('x'));
    h.key(KeyCode::Tab);
    h.key(KeyCode::Enter);

    assert_eq!(*h.key_downs.borrow(), 4);
    assert_eq!(h.changes.borrow().len(), 1);
}

#[test_log::test]
fn blur_reported_when_focus_leaves() {
    let mut h = Harness::new(Harness::numbers(), None);
    h.select.set_focus(true);
    h.key(KeyCode::Enter);
    h.key(KeyCode::Down);
    assert_eq!(*h.blurs.borrow(), 0);

    h.key(KeyCode::Enter);
    assert_eq!(h.select.focus(), FocusTarget::Root);
    h.select.set_focus(false);

    assert_eq!(*h.blurs.borrow(), 1);
    assert_eq!(h.select.focus_state(), FocusState::Unfocused);
}

#[test_log::test]
fn two_selects_share_a_document() {
    let document = Document::new();
    let mut top = Select::new(SelectProps::new(Harness::numbers()), &document);
    let mut bottom = Select::new(SelectProps::new(Harness::numbers()), &document);
    let top_area = Rect::new(0, 0, 20, 3);
    let bottom_area = Rect::new(0, 10, 20, 8);
    top.layout(top_area);
    bottom.layout(bottom_area);

    let mut open_top = PropagatedEvent::new(Event::Mouse(MouseEvent::click(2, 1)));
    top.handle_event(&mut open_top);
    bottom.handle_event(&mut open_top);
    assert!(top.is_open());
    assert!(!bottom.is_open());
    assert_eq!(document.subscribers(&open_top.event), vec![top.id()]);

    // Opening the second select is an outside click for the first.
    let mut open_bottom = PropagatedEvent::new(Event::Mouse(MouseEvent::click(2, 11)));
    top.handle_event(&mut open_bottom);
    bottom.handle_event(&mut open_bottom);
    assert!(!top.is_open());
    assert!(bottom.is_open());
    assert_eq!(document.listener_count(), 2);
}
