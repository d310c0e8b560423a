//! TOML configuration for a select.
//!
//! ```toml
//! label_text = "Fruit"
//! placeholder = "Pick a fruit"
//! value = "pear"
//! max_menu_height = 5
//!
//! [[options]]
//! value = "apple"
//! display = "Apple"
//!
//! [[options]]
//! value = "pear"
//! display = "Pear"
//! ```

use crate::error::{Result, SelectError};
use crate::layout::DEFAULT_MAX_MENU_HEIGHT;
use crate::option::SelectOption;
use crate::props::SelectProps;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Everything about a select that can be declared up front. Callbacks are
/// attached to the [`SelectProps`] this produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Options in display order.
    pub options: Vec<SelectOption>,

    /// Initial controlled value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Text shown while nothing is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Label drawn as the root's title.
    pub label_text: String,

    /// Form field name.
    pub name: String,

    /// Element id.
    pub id: String,

    /// Message drawn under the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,

    /// Rows shown before the menu scrolls.
    pub max_menu_height: u16,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            value: None,
            placeholder: None,
            label_text: String::new(),
            name: String::new(),
            id: String::new(),
            validation_message: None,
            max_menu_height: DEFAULT_MAX_MENU_HEIGHT,
        }
    }
}

impl SelectConfig {
    /// Parses and validates a config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SelectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            options = config.options.len(),
            "select config loaded"
        );
        Ok(config)
    }

    /// Serializes the config back to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Checks that every option has a non-empty, unique value.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, option) in self.options.iter().enumerate() {
            if option.value.is_empty() {
                return Err(SelectError::EmptyValue { index });
            }
            if !seen.insert(option.value.as_str()) {
                return Err(SelectError::DuplicateValue(option.value.clone()));
            }
        }
        Ok(())
    }

    /// Builds props from this config.
    pub fn into_props(self) -> SelectProps {
        let mut props = SelectProps::new(self.options)
            .label_text(self.label_text)
            .name(self.name)
            .id(self.id);
        props.value = self.value;
        props.placeholder = self.placeholder;
        props.validation_message = self.validation_message;
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r#"
label_text = "Fruit"
placeholder = "Pick a fruit"
value = "pear"

[[options]]
value = "apple"
display = "Apple"

[[options]]
value = "pear"
display = "Pear"
"#;

    #[test]
    fn test_parse_sample() {
        let config = SelectConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.label_text, "Fruit");
        assert_eq!(config.value.as_deref(), Some("pear"));
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.max_menu_height, DEFAULT_MAX_MENU_HEIGHT);
        assert_eq!(config.validation_message, None);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SelectConfig::from_toml_str("").unwrap(), SelectConfig::default());
    }

    #[test]
    fn test_rejects_duplicate_values() {
        let err = SelectConfig::from_toml_str(
            r#"
[[options]]
value = "a"
display = "A"

[[options]]
value = "a"
display = "Again"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SelectError::DuplicateValue(ref v) if v == "a"));
    }

    #[test]
    fn test_rejects_empty_value() {
        let err = SelectConfig::from_toml_str(
            r#"
[[options]]
value = ""
display = "Nothing"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SelectError::EmptyValue { index: 0 }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SelectConfig::from_toml_str("options = 3").unwrap_err();
        assert!(matches!(err, SelectError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = SelectConfig::load(file.path()).unwrap();
        assert_eq!(config.placeholder.as_deref(), Some("Pick a fruit"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = SelectConfig::load(&path).unwrap_err();
        assert!(matches!(err, SelectError::Io { path: ref p, .. } if p == &path));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = SelectConfig::from_toml_str(SAMPLE).unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(SelectConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_into_props() {
        let props = SelectConfig::from_toml_str(SAMPLE).unwrap().into_props();
        assert_eq!(props.value.as_deref(), Some("pear"));
        assert_eq!(props.placeholder.as_deref(), Some("Pick a fruit"));
        assert_eq!(props.label_text, "Fruit");
    }
}
