//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by operations on a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A birthday query was made on a record without one
    #[error("Birthday not set.")]
    BirthdayNotSet,

    /// The next birthday would fall outside the supported calendar
    #[error("Birthday date is out of range.")]
    DateOutOfRange,
}

/// Errors a dispatched command can end with.
///
/// Every variant renders as the single line shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed phone number, birthday or name
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Named contact is not in the book
    #[error("Contact not found.")]
    NotFound,

    /// Command was given too few arguments; carries the usage hint
    #[error("{0}")]
    MissingArgument(&'static str),

    /// Contact exists but has no birthday to show
    #[error("No birthday found for this contact.")]
    NoBirthday,

    /// `change` on a contact without phones
    #[error("No phones available for contact {0}.")]
    NoPhones(String),

    /// Interactive phone selection was not a listed index
    #[error("Invalid phone selection.")]
    InvalidSelection,

    /// Input ended while an interactive prompt was waiting
    #[error("Operation cancelled.")]
    Cancelled,
}

/// Errors that can occur while persisting the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The book could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
