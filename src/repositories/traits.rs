use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fmt;

/// How a load went. Loading never fails; every outcome yields a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and decoded.
    Loaded { contacts: usize },

    /// No file yet; an empty book was substituted.
    NotFound,

    /// The file exists but could not be read or decoded; an empty book
    /// was substituted and the stored data is lost.
    Corrupted { reason: String },
}

impl LoadOutcome {
    /// Whether the user should be warned about this outcome.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Loaded { .. })
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { contacts } => write!(f, "Loaded {} contact(s).", contacts),
            Self::NotFound => write!(f, "File not found, empty address book loaded."),
            Self::Corrupted { .. } => write!(f, "Error loading file. The file may be damaged."),
        }
    }
}

/// Repository for persisting the address book.
///
/// Provides abstraction over where and how the book is stored,
/// enabling different implementations (file, in-memory mock).
pub trait BookRepository {
    /// Load the whole book, substituting an empty one when nothing usable is stored.
    fn load(&self) -> (AddressBook, LoadOutcome);

    /// Replace whatever is stored with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
