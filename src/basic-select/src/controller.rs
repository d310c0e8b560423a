//! The interaction state machine.
//!
//! `InteractionController` is the only code that mutates [`WidgetState`].
//! Every input reaches it as a [`ControllerInput`] and goes through one
//! dispatch table in [`InteractionController::dispatch`]; geometry and
//! event routing are resolved beforehand by the caller.

use crate::component::ComponentResult;
use crate::focus::{FocusDirection, FocusTarget, neighbour};
use crate::option::{SelectOption, position_of};
use crate::projector::{self, RowView};
use crate::props::Callbacks;
use basic_select_input::NamedKey;

/// Open/selection/focus state owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Whether the menu is presented and interactive.
    pub is_open: bool,
    /// The committed selection. `None` shows the placeholder.
    pub selected: Option<SelectOption>,
    /// Row that holds the keyboard cursor while open. `None` while closed
    /// or when there are no options.
    pub focused_index: Option<usize>,
}

/// Where a document-level click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// On menu row `i`.
    Row(usize),
    /// Inside the menu region but not on a row (border, padding).
    Menu,
    /// Anywhere outside the menu region, the root included.
    Outside,
}

/// Typed controller inputs.
///
/// `Root*` inputs come from element-level handlers and are only meaningful
/// while closed. `Document*` inputs come from the document listeners that
/// exist only while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerInput {
    /// A click landed inside the root element.
    RootClick,
    /// A keydown reached the focused root element.
    RootKey(NamedKey),
    /// A click observed by the document listener.
    DocumentClick(ClickTarget),
    /// A keydown observed by the document listener.
    DocumentKey(NamedKey),
}

/// Result of one dispatched input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// What happened, from the host's point of view.
    pub result: ComponentResult<SelectOption>,
    /// The host must suppress its default action for the event.
    pub prevent_default: bool,
}

impl Outcome {
    fn handled() -> Self {
        Self::from(ComponentResult::Handled)
    }

    fn ignored() -> Self {
        Self::from(ComponentResult::NotHandled)
    }

    fn prevented() -> Self {
        Self {
            result: ComponentResult::Handled,
            prevent_default: true,
        }
    }
}

impl From<ComponentResult<SelectOption>> for Outcome {
    fn from(result: ComponentResult<SelectOption>) -> Self {
        Self {
            result,
            prevent_default: false,
        }
    }
}

/// Owns [`WidgetState`] and enforces its invariants.
#[derive(Debug)]
pub struct InteractionController {
    state: WidgetState,
    options: Vec<SelectOption>,
    controlled_value: Option<String>,
    focus: FocusTarget,
    pending_focus: Option<FocusTarget>,
    callbacks: Callbacks,
}

impl InteractionController {
    /// Creates a closed controller, resolving `value` against `options`.
    pub fn new(options: Vec<SelectOption>, value: Option<String>, callbacks: Callbacks) -> Self {
        let selected = value
            .as_deref()
            .and_then(|value| position_of(&options, value))
            .map(|index| options[index].clone());
        if selected.is_none()
            && let Some(value) = value.as_deref()
        {
            tracing::trace!(value, "initial value matches no option");
        }

        Self {
            state: WidgetState {
                is_open: false,
                selected,
                focused_index: None,
            },
            options,
            controlled_value: value,
            focus: FocusTarget::Outside,
            pending_focus: None,
            callbacks,
        }
    }

    /// Current state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// The committed selection.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.state.selected.as_ref()
    }

    /// The cursor row while open.
    pub fn focused_index(&self) -> Option<usize> {
        self.state.focused_index
    }

    /// Where keyboard focus sits.
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Focus requested by the last open, not yet applied.
    pub fn pending_focus(&self) -> Option<FocusTarget> {
        self.pending_focus
    }

    /// The current options.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Rows to draw for the current state.
    pub fn rows(&self) -> Vec<RowView<'_>> {
        projector::project(&self.options, self.state.selected.as_ref(), self.state.is_open)
    }

    /// Handles one input. This is the whole transition table.
    pub fn dispatch(&mut self, input: ControllerInput) -> Outcome {
        let is_open = self.state.is_open;
        match (is_open, input) {
            (false, ControllerInput::RootClick) => {
                self.move_focus(FocusTarget::Root);
                self.open("root click");
                Outcome::handled()
            }
            (false, ControllerInput::RootKey(key)) if key.is_toggle() => {
                self.open("toggle key");
                Outcome::handled()
            }
            (true, ControllerInput::DocumentClick(target)) => self.document_click(target),
            (true, ControllerInput::DocumentKey(key)) => {
                self.callbacks.key_down();
                self.document_key(key)
            }
            (_, input) => {
                tracing::trace!(?input, is_open, "input ignored in current state");
                Outcome::ignored()
            }
        }
    }

    fn document_click(&mut self, target: ClickTarget) -> Outcome {
        match target {
            ClickTarget::Row(index) => self.commit(index),
            ClickTarget::Menu => Outcome::handled(),
            ClickTarget::Outside => {
                self.close("outside click");
                Outcome::from(ComponentResult::Cancelled)
            }
        }
    }

    fn document_key(&mut self, key: NamedKey) -> Outcome {
        match key {
            NamedKey::Escape => {
                self.close("escape");
                Outcome::from(ComponentResult::Cancelled)
            }
            NamedKey::Tab | NamedKey::BackTab => Outcome::prevented(),
            NamedKey::ArrowDown => self.step(FocusDirection::Forward),
            NamedKey::ArrowUp => self.step(FocusDirection::Backward),
            NamedKey::Space | NamedKey::Enter => match self.focus.row() {
                Some(index) => self.commit(index),
                None => Outcome::ignored(),
            },
            NamedKey::Other => Outcome::ignored(),
        }
    }

    fn step(&mut self, direction: FocusDirection) -> Outcome {
        let Some(current) = self.focus.row() else {
            return Outcome::ignored();
        };
        if let Some(next) = neighbour(current, self.options.len(), direction) {
            self.state.focused_index = Some(next);
            self.move_focus(FocusTarget::Row(next));
        }
        Outcome::handled()
    }

    fn open(&mut self, reason: &'static str) {
        let focused_index = projector::focus_row(&self.options, self.state.selected.as_ref());
        self.state.is_open = true;
        self.state.focused_index = focused_index;
        self.pending_focus = focused_index.map(FocusTarget::Row);
        tracing::debug!(from = "closed", to = "open", reason, ?focused_index, "select transition");
    }

    fn commit(&mut self, index: usize) -> Outcome {
        let Some(option) = self.options.get(index).cloned() else {
            return Outcome::ignored();
        };
        self.state = WidgetState {
            is_open: false,
            selected: Some(option.clone()),
            focused_index: None,
        };
        self.after_close("commit");
        self.callbacks.change(&option);
        Outcome::from(ComponentResult::Done(option))
    }

    fn close(&mut self, reason: &'static str) {
        self.state.is_open = false;
        self.state.focused_index = None;
        self.after_close(reason);
    }

    fn after_close(&mut self, reason: &'static str) {
        self.pending_focus = None;
        // Closed menus have no rows. Other focus targets are left alone.
        self.focus = match self.focus {
            _ if self.state.selected.is_some() => FocusTarget::Root,
            FocusTarget::Row(_) => FocusTarget::Document,
            other => other,
        };
        tracing::debug!(
            from = "open",
            to = "closed",
            reason,
            selected = self.state.selected.as_ref().map(|o| o.value.as_str()),
            focus = %self.focus,
            "select transition"
        );
    }

    /// Applies focus requested by the last open. Call once the menu rows
    /// exist, i.e. after layout.
    pub fn apply_pending_focus(&mut self) -> Option<FocusTarget> {
        let target = self.pending_focus.take()?;
        if self.state.is_open {
            self.move_focus(target);
            Some(target)
        } else {
            None
        }
    }

    /// Records a focus change made outside the controller (host focus
    /// traversal, a click elsewhere). Fires `on_blur` when focus leaves the
    /// root subtree.
    pub fn focus_changed(&mut self, target: FocusTarget) {
        self.move_focus(target);
    }

    fn move_focus(&mut self, target: FocusTarget) {
        let previous = std::mem::replace(&mut self.focus, target);
        if previous.is_within() && !target.is_within() {
            tracing::trace!(from = %previous, to = %target, "focus left select");
            self.callbacks.blur();
        }
    }

    /// Applies a controlled value from the host.
    ///
    /// Re-applying the value already in effect does nothing. A value that
    /// matches no option, or `None`, leaves the selection as it is. Never
    /// touches `is_open` or `focused_index`.
    pub fn set_controlled_value(&mut self, value: Option<&str>) {
        if self.controlled_value.as_deref() == value {
            return;
        }
        self.controlled_value = value.map(str::to_owned);
        self.resolve_controlled_value();
    }

    fn resolve_controlled_value(&mut self) {
        let Some(value) = self.controlled_value.as_deref() else {
            return;
        };
        match position_of(&self.options, value) {
            Some(index) => {
                if self.state.selected.as_ref() != Some(&self.options[index]) {
                    tracing::debug!(value, "controlled value applied");
                    self.state.selected = Some(self.options[index].clone());
                }
            }
            None => tracing::trace!(value, "controlled value matches no option"),
        }
    }

    /// Replaces the option list.
    ///
    /// The selection persists. While open, the cursor row is clamped to the
    /// new list; with no options left, a focused row falls back to the
    /// document.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.resolve_controlled_value();

        if !self.state.is_open {
            return;
        }
        let last = self.options.len().checked_sub(1);
        self.state.focused_index = match (self.state.focused_index, last) {
            (_, None) => None,
            (Some(index), Some(last)) => Some(index.min(last)),
            (None, Some(_)) => projector::focus_row(&self.options, self.state.selected.as_ref()),
        };
        if let Some(FocusTarget::Row(_)) = self.pending_focus {
            self.pending_focus = self.state.focused_index.map(FocusTarget::Row);
        }
        if self.focus.row().is_some() {
            self.focus = self
                .state
                .focused_index
                .map_or(FocusTarget::Document, FocusTarget::Row);
        }
    }
}
