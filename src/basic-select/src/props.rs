//! Construction parameters supplied by the host.

use crate::option::SelectOption;
use std::collections::HashSet;
use std::fmt;

/// Invoked once per committed selection.
pub type ChangeCallback = Box<dyn FnMut(&SelectOption)>;
/// Invoked when focus leaves the widget.
pub type BlurCallback = Box<dyn FnMut()>;
/// Invoked once per keydown observed while the menu is open.
pub type KeyDownCallback = Box<dyn FnMut()>;

/// Host callbacks. Any of them may be absent.
#[derive(Default)]
pub struct Callbacks {
    pub(crate) on_change: Option<ChangeCallback>,
    pub(crate) on_blur: Option<BlurCallback>,
    pub(crate) on_key_down: Option<KeyDownCallback>,
}

impl Callbacks {
    pub(crate) fn change(&mut self, option: &SelectOption) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(option);
        }
    }

    pub(crate) fn blur(&mut self) {
        if let Some(on_blur) = self.on_blur.as_mut() {
            on_blur();
        }
    }

    pub(crate) fn key_down(&mut self) {
        if let Some(on_key_down) = self.on_key_down.as_mut() {
            on_key_down();
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish()
    }
}

/// Everything a host passes when mounting a select.
///
/// `label_text`, `name` and `id` are carried for labelling and never
/// consulted by the interaction logic.
///
/// ```
/// use basic_select::{SelectOption, SelectProps};
///
/// let props = SelectProps::new(vec![
///     SelectOption::new("1", "One"),
///     SelectOption::new("2", "Two"),
/// ])
/// .value("2")
/// .placeholder("Pick a number")
/// .label_text("Number")
/// .on_change(|option| println!("picked {}", option.value));
///
/// assert_eq!(props.options.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SelectProps {
    /// Options in display order. May be empty.
    pub options: Vec<SelectOption>,
    /// Controlled value, resolved against `options` by exact match.
    pub value: Option<String>,
    /// Text shown while nothing is selected.
    pub placeholder: Option<String>,
    /// Label drawn as the root's title.
    pub label_text: String,
    /// Form field name.
    pub name: String,
    /// Element id.
    pub id: String,
    /// Message drawn under the root when present.
    pub validation_message: Option<String>,
    pub(crate) callbacks: Callbacks,
}

impl SelectProps {
    /// Creates props with the given options and everything else unset.
    pub fn new(options: Vec<SelectOption>) -> Self {
        let props = Self {
            options,
            ..Self::default()
        };
        props.warn_on_duplicates();
        props
    }

    /// Sets the controlled value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the label text.
    pub fn label_text(mut self, label_text: impl Into<String>) -> Self {
        self.label_text = label_text.into();
        self
    }

    /// Sets the field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the validation message.
    pub fn validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = Some(message.into());
        self
    }

    /// Sets the commit callback.
    pub fn on_change(mut self, f: impl FnMut(&SelectOption) + 'static) -> Self {
        self.callbacks.on_change = Some(Box::new(f));
        self
    }

    /// Sets the blur callback.
    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_blur = Some(Box::new(f));
        self
    }

    /// Sets the open-menu keydown callback.
    pub fn on_key_down(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_key_down = Some(Box::new(f));
        self
    }

    fn warn_on_duplicates(&self) {
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.value.as_str()) {
                tracing::warn!(
                    value = %option.value,
                    "duplicate option value; selection resolves to the first match"
                );
            }
        }
    }
}
