use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::{BookRepository, LoadOutcome};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the "stored" book in memory, can be told to fail saves, and
/// tracks method calls for verification. Clones share the same storage.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    load_outcome: Arc<Mutex<Option<LoadOutcome>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing stored.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            load_outcome: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make the next loads report `outcome` with an empty book.
    pub fn load_as(&self, outcome: LoadOutcome) {
        *self.load_outcome.lock().unwrap() = Some(outcome);
    }

    /// Make every save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The book as last saved.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> (AddressBook, LoadOutcome) {
        self.track_call("load");

        if let Some(outcome) = self.load_outcome.lock().unwrap().clone() {
            return (AddressBook::new(), outcome);
        }

        match self.stored.lock().unwrap().clone() {
            Some(book) => {
                let contacts = book.len();
                (book, LoadOutcome::Loaded { contacts })
            }
            None => (AddressBook::new(), LoadOutcome::NotFound),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
