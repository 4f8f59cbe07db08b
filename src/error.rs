//! Error types for the namespace store, the command interpreter, and the CLI layer.

use crate::types::EntryKind;
use thiserror::Error;

/// Errors raised by structural operations on the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No entry named '{0}'")]
    NotFound(String),

    #[error("'{name}' is not a {expected}")]
    WrongKind { name: String, expected: EntryKind },

    #[error("An entry named '{0}' already exists")]
    AlreadyExists(String),
}

/// Errors surfaced to the user as a single output line.
///
/// The `Display` text is the exact line the shell prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Error: Directory not found - {0}")]
    DirectoryNotFound(String),

    #[error("Error: File not found - {0}")]
    FileNotFound(String),

    #[error("Error: Source file not found - {0}")]
    SourceFileNotFound(String),

    #[error("Error: Directory already exists - {0}")]
    DirectoryExists(String),

    #[error("Error: Invalid name - {0}")]
    InvalidName(String),

    #[error("Error: Missing argument - usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Unknown command. Type \"help\" for assistance.")]
    UnknownCommand(String),
}

/// Errors outside a running session: configuration, logging, and I/O.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
