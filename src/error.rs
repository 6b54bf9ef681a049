//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Lookup misses on checked `find` paths are not errors: use-case operations report
//! them as status strings instead.

use crate::domain::ValidationError;
use thiserror::Error;

/// Message shown when a phone number or date fails validation.
pub const MSG_INVALID_INPUT: &str = "Give me name and phone please.";

/// Message shown when a command is given too few arguments.
pub const MSG_MISSING_ARGUMENTS: &str = "Enter the contact name please.";

/// Message shown when a direct keyed lookup misses.
pub const MSG_UNKNOWN_CONTACT: &str = "This contact is not exist :(";

/// Errors raised by use-case operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number, birthday or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The caller supplied fewer tokens than the operation needs
    #[error("Expected at least {expected} arguments, got {got}")]
    MissingArguments { expected: usize, got: usize },

    /// A direct keyed lookup found no record
    #[error("No contact named {0}")]
    UnknownContact(String),
}

impl CommandError {
    /// The fixed user-facing message for this error kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => MSG_INVALID_INPUT,
            Self::MissingArguments { .. } => MSG_MISSING_ARGUMENTS,
            Self::UnknownContact(_) => MSG_UNKNOWN_CONTACT,
        }
    }
}

/// Errors that can occur while loading or saving a directory snapshot.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON or holds invalid fields
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading commands or writing replies failed
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    /// The directory could not be saved
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
