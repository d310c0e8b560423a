//! The mounted select: controller, listener bridge and last layout.

use crate::bridge::{Document, ExternalEventBridge};
use crate::component::{Component, ComponentResult, FocusState};
use crate::controller::{ClickTarget, ControllerInput, InteractionController, WidgetState};
use crate::focus::FocusTarget;
use crate::id::WidgetId;
use crate::layout::{DEFAULT_MAX_MENU_HEIGHT, ROOT_HEIGHT, SelectLayout};
use crate::option::SelectOption;
use crate::projector::RowView;
use crate::props::SelectProps;
use crate::style::SelectTheme;
use crate::widget::SelectWidget;
use basic_select_input::{Event, KeyEvent, PropagatedEvent, PropagatingEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// A dropdown select mounted on a [`Document`].
///
/// The host feeds every terminal event to [`Select::handle_event`], calls
/// [`Select::layout`] once per frame before drawing, and reports focus
/// moves made by its own traversal through [`Component::set_focus`].
///
/// ```
/// use basic_select::{Document, Select, SelectOption, SelectProps};
/// use basic_select_input::{Event, MouseEvent, PropagatedEvent};
/// use ratatui::layout::Rect;
///
/// let document = Document::new();
/// let props = SelectProps::new(vec![
///     SelectOption::new("1", "One"),
///     SelectOption::new("2", "Two"),
/// ]);
/// let mut select = Select::new(props, &document);
/// select.layout(Rect::new(0, 0, 30, 10));
///
/// let mut click = PropagatedEvent::new(Event::Mouse(MouseEvent::click(4, 1)));
/// select.handle_event(&mut click);
/// assert!(select.is_open());
/// assert_eq!(document.listener_count(), 2);
/// ```
#[derive(Debug)]
pub struct Select {
    id: WidgetId,
    controller: InteractionController,
    bridge: ExternalEventBridge,
    placeholder: Option<String>,
    label_text: String,
    name: String,
    element_id: String,
    validation_message: Option<String>,
    max_menu_height: u16,
    theme: SelectTheme,
    layout: Option<SelectLayout>,
}

impl Select {
    /// Mounts a closed select.
    pub fn new(props: SelectProps, document: &Document) -> Self {
        let id = WidgetId::new();
        let SelectProps {
            options,
            value,
            placeholder,
            label_text,
            name,
            id: element_id,
            validation_message,
            callbacks,
        } = props;
        tracing::debug!(%id, options = options.len(), "select mounted");

        Self {
            id,
            controller: InteractionController::new(options, value, callbacks),
            bridge: ExternalEventBridge::new(id, document.clone()),
            placeholder,
            label_text,
            name,
            element_id,
            validation_message,
            max_menu_height: DEFAULT_MAX_MENU_HEIGHT,
            theme: SelectTheme::default(),
            layout: None,
        }
    }

    /// Sets how many rows the menu shows before scrolling.
    pub fn with_max_menu_height(mut self, rows: u16) -> Self {
        self.max_menu_height = rows.max(1);
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: SelectTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Widget instance id.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// The committed selection.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.controller.selected()
    }

    /// The cursor row while open.
    pub fn focused_index(&self) -> Option<usize> {
        self.controller.focused_index()
    }

    /// Where keyboard focus sits relative to this select.
    pub fn focus(&self) -> FocusTarget {
        self.controller.focus()
    }

    /// Full controller state.
    pub fn state(&self) -> &WidgetState {
        self.controller.state()
    }

    /// The current options.
    pub fn options(&self) -> &[SelectOption] {
        self.controller.options()
    }

    /// Projected menu rows.
    pub fn rows(&self) -> Vec<RowView<'_>> {
        self.controller.rows()
    }

    /// Selected option's display text, else the placeholder.
    pub fn display_text(&self) -> Option<&str> {
        self.selected()
            .map(|option| option.display.as_str())
            .or(self.placeholder.as_deref())
    }

    /// Label drawn on the root.
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// Form field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element id supplied by the host.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Validation message, if any.
    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    /// Sets or clears the validation message.
    pub fn set_validation_message(&mut self, message: Option<String>) {
        self.validation_message = message;
    }

    /// The theme.
    pub fn theme(&self) -> &SelectTheme {
        &self.theme
    }

    /// True while this select holds document listeners.
    pub fn is_listening(&self) -> bool {
        self.bridge.is_attached()
    }

    /// Layout stored by the last [`Select::layout`] call.
    pub fn last_layout(&self) -> Option<&SelectLayout> {
        self.layout.as_ref()
    }

    /// Applies a new controlled value.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.controller.set_controlled_value(value);
    }

    /// Replaces the options.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.controller.set_options(options);
    }

    /// Computes the regions for `area` without storing them.
    pub fn compute_layout(&self, area: Rect) -> SelectLayout {
        let rows = if self.controller.is_open() {
            self.controller.options().len()
        } else {
            0
        };
        let mut layout = SelectLayout::compute(area, rows, self.max_menu_height);
        if let Some(previous) = &self.layout {
            layout = layout.with_offset(previous.offset());
        }
        if let Some(index) = self.controller.focused_index() {
            layout.scroll_to(index);
        }
        layout
    }

    /// Lays the select out for this frame and applies any focus move
    /// requested by the last open. Clicks are hit-tested against the
    /// regions computed here until the next call.
    pub fn layout(&mut self, area: Rect) -> &SelectLayout {
        let layout = self.compute_layout(area);
        if let Some(target) = self.controller.apply_pending_focus() {
            tracing::trace!(id = %self.id, focus = %target, "pending focus applied");
        }
        self.layout.insert(layout)
    }

    /// Routes one event.
    ///
    /// While the menu is open the document listeners see every click and
    /// keydown; otherwise only clicks on the root and keys reaching the
    /// focused root are handled. Tab is default-prevented while open.
    pub fn handle_event(
        &mut self,
        event: &mut PropagatedEvent<Event>,
    ) -> ComponentResult<SelectOption> {
        let input = if self.bridge.receives(&event.event) {
            self.document_input(&event.event)
        } else {
            self.element_input(&event.event)
        };
        let Some(input) = input else {
            return ComponentResult::NotHandled;
        };
        tracing::trace!(id = %self.id, event = %event.event, ?input, "select event");

        let outcome = self.controller.dispatch(input);
        if outcome.prevent_default {
            event.prevent_default();
        }
        self.bridge.sync(self.controller.is_open());
        outcome.result
    }

    fn element_input(&self, event: &Event) -> Option<ControllerInput> {
        match event {
            Event::Mouse(mouse) if mouse.kind.is_primary_click() => {
                let position = Position::from(mouse.position());
                self.layout
                    .as_ref()
                    .filter(|layout| layout.root_contains(position))
                    .map(|_| ControllerInput::RootClick)
            }
            Event::Key(key) if key.is_key_down() && self.controller.focus() == FocusTarget::Root => {
                Some(ControllerInput::RootKey(key.named()))
            }
            _ => None,
        }
    }

    fn document_input(&self, event: &Event) -> Option<ControllerInput> {
        match event {
            Event::Mouse(mouse) if mouse.kind.is_primary_click() => {
                let position = Position::from(mouse.position());
                let target = match &self.layout {
                    Some(layout) => match layout.row_at(position) {
                        Some(index) => ClickTarget::Row(index),
                        None if layout.menu_contains(position) => ClickTarget::Menu,
                        None => ClickTarget::Outside,
                    },
                    None => ClickTarget::Outside,
                };
                Some(ControllerInput::DocumentClick(target))
            }
            Event::Key(key) if key.is_key_down() => Some(ControllerInput::DocumentKey(key.named())),
            _ => None,
        }
    }

    /// Host focus traversal landed on this select.
    pub fn focus_root(&mut self) {
        if !self.controller.focus().is_within() {
            self.controller.focus_changed(FocusTarget::Root);
        }
    }

    /// Host moved focus elsewhere.
    pub fn blur(&mut self) {
        self.controller.focus_changed(FocusTarget::Outside);
    }
}

impl Component for Select {
    type Output = SelectOption;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        SelectWidget::new(self).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<SelectOption> {
        let mut event = PropagatedEvent::new(Event::Key(key));
        self.handle_event(&mut event)
    }

    fn focus_state(&self) -> FocusState {
        match (self.controller.focus().is_within(), self.is_open()) {
            (false, _) => FocusState::Unfocused,
            (true, false) => FocusState::Focused,
            (true, true) => FocusState::Editing,
        }
    }

    fn set_focus(&mut self, focused: bool) {
        if focused {
            self.focus_root();
        } else {
            self.blur();
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.is_open() {
            vec![("↑↓", "Move"), ("Enter", "Select"), ("Esc", "Close")]
        } else {
            vec![("Enter", "Open")]
        }
    }

    fn desired_size(&self) -> (u16, u16) {
        let widest = self
            .options()
            .iter()
            .map(|option| option.display.width())
            .chain(self.placeholder.as_deref().map(|placeholder| placeholder.width()))
            .chain(std::iter::once(self.label_text.width()))
            .max()
            .unwrap_or(0);
        // Borders, the check mark column and the arrow.
        let width = u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(6);
        let height = ROOT_HEIGHT + u16::from(self.validation_message.is_some());
        (width, height)
    }
}
