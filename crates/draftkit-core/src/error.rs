//! Error types for Draftkit operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Draftkit crates. Uses `thiserror` for derive macros.
//!
//! Only the ingestion and editing boundaries return errors. Normalizers are
//! total and never construct one.

use thiserror::Error;

/// Errors that can occur in Draftkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input text was blank where content is required.
    #[error("Input is empty")]
    EmptyInput,

    /// Input text could not be parsed (bad JSON, unbalanced braces,
    /// unterminated strings).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A referenced item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An edit collides with an existing item.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a malformed input error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Whether this error came from the text-ingestion boundary.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::MalformedInput(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using Draftkit's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::config("x"), Error::Config(m) if m == "x"));
        assert!(matches!(Error::malformed("x"), Error::MalformedInput(m) if m == "x"));
        assert!(matches!(Error::not_found("x"), Error::NotFound(m) if m == "x"));
        assert!(matches!(Error::conflict("x"), Error::Conflict(m) if m == "x"));
        assert!(matches!(Error::invalid_data("x"), Error::InvalidData(m) if m == "x"));
        assert!(matches!(Error::serialization("x"), Error::Serialization(m) if m == "x"));
    }

    #[test]
    fn test_error_display() {
        let err = Error::malformed("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Malformed input: expected value at line 1 column 1"
        );
        assert_eq!(Error::EmptyInput.to_string(), "Input is empty");
    }

    #[test]
    fn test_is_input_error() {
        assert!(Error::EmptyInput.is_input_error());
        assert!(Error::malformed("bad").is_input_error());
        assert!(!Error::config("bad").is_input_error());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
