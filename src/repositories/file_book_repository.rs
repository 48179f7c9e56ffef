use super::traits::{BookRepository, LoadOutcome};
use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed implementation of BookRepository.
///
/// The book is stored as a single JSON document. Saves go to a sibling
/// `.tmp` file that is then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl BookRepository for FileBookRepository {
    fn load(&self) -> (AddressBook, LoadOutcome) {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No address book file, starting empty");
                return (AddressBook::new(), LoadOutcome::NotFound);
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read address book"
                );
                return (
                    AddressBook::new(),
                    LoadOutcome::Corrupted {
                        reason: e.to_string(),
                    },
                );
            }
        };

        match serde_json::from_slice::<AddressBook>(&bytes) {
            Ok(book) => {
                tracing::info!(
                    path = %self.path.display(),
                    contacts = book.len(),
                    "Address book loaded"
                );
                let contacts = book.len();
                (book, LoadOutcome::Loaded { contacts })
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Address book is damaged, starting empty"
                );
                (
                    AddressBook::new(),
                    LoadOutcome::Corrupted {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec(book)?;
        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path)?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
