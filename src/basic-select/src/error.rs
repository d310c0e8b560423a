//! Error types for basic-select.
//!
//! The interaction state machine itself never fails; these errors come from
//! loading a [`SelectConfig`](crate::config::SelectConfig).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or does not match the schema.
    #[error("invalid select config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two options share a value, which makes selection by value ambiguous.
    #[error("duplicate option value: {0:?}")]
    DuplicateValue(String),

    /// An option has an empty value.
    #[error("option {index} has an empty value")]
    EmptyValue {
        /// Position of the offending option.
        index: usize,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, SelectError>;
