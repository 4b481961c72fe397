//! Result and error types for calcboard.
//!
//! The calculator itself never fails; these cover everything around it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for calcboard operations
pub type CalcboardResult<T> = Result<T, CalcboardError>;

/// Errors that can occur outside the state machine
#[derive(Debug, Error)]
pub enum CalcboardError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Configuration YAML could not be parsed or written
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A key name that maps to no calculator input
    #[error("Unknown key: {key:?}")]
    UnknownKey {
        /// The offending key
        key: String,
    },

    /// Terminal setup, drawing or event reading failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl CalcboardError {
    /// Create an I/O error for a path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_message() {
        let err = CalcboardError::unknown_key("%");
        assert_eq!(err.to_string(), "Unknown key: \"%\"");
    }

    #[test]
    fn test_io_message_names_path() {
        let err = CalcboardError::io(
            "/tmp/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.yaml"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_yaml_from() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[not, a, number]").unwrap_err();
        let err: CalcboardError = yaml_err.into();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
