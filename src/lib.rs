//! Contact Book - an interactive command-line contact manager.
//!
//! Keeps named contacts with validated phone numbers and an optional
//! birthday, reports birthdays coming up within a week, and persists the
//! whole book to a file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the address book that owns them
//! - **repositories**: Loading and saving the address book
//! - **commands**: Parsing input lines and dispatching them to the book
//! - **console**: Terminal input/output
//! - **session**: The interactive loop tying everything together
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod commands;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::{Dispatcher, Outcome, Reply, Tone};
pub use config::Config;
pub use console::{Console, TerminalConsole};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, ContactRecord, UpcomingBirthday};
pub use repositories::{BookRepository, FileBookRepository, LoadOutcome};
pub use session::{Session, SessionState};
