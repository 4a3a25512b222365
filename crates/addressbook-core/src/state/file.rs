// # File Book Store
//
// File-based implementation of BookStore.
//
// ## Crash Recovery
//
// - Atomic writes: the snapshot is written to `<file>.tmp`, then renamed
// - Automatic backup: the previous snapshot is kept as `<file>.backup`
// - Corruption detection: the JSON is validated on load
// - Recovery: a corrupt main file is replaced by the backup when the backup
//   parses; with no usable backup the session starts from an empty book
//
// ## File Format
//
// ```json
// {
//   "version": 1,
//   "contacts": [
//     { "name": "Ivan", "phones": ["0501234567"], "birthday": "01.01.2000" },
//     { "name": "Olena", "phones": [], "birthday": null }
//   ]
// }
// ```
//
// `version` is bumped only for incompatible changes. New optional fields get
// serde defaults, so files written by older builds keep loading. A file with
// a version newer than this build understands is refused rather than
// silently truncated.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::Error;
use crate::book::AddressBook;
use crate::traits::book_store::BookStore;

/// Current book file schema version
pub const BOOK_FILE_VERSION: u32 = 1;

/// Default file name, relative to the working directory
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// File-based book store with crash recovery
///
/// # Example
///
/// ```rust,no_run
/// use addressbook_core::{AddressBook, BookStore, FileBookStore, Record};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FileBookStore::new("addressbook.json").await?;
///
///     let mut book = store.load().await?;
///     book.add_record(Record::new("Ivan"));
///     store.save(&book).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileBookStore {
    path: PathBuf,
}

#[derive(Serialize)]
struct BookFileOut<'a> {
    version: u32,
    contacts: &'a AddressBook,
}

#[derive(Deserialize)]
struct BookFileIn {
    version: u32,
    #[serde(default)]
    contacts: AddressBook,
}

impl FileBookStore {
    /// Create a store for `path`, creating parent directories if needed
    ///
    /// Nothing is read until [`BookStore::load`] is called.
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::config(format!(
                    "Failed to create book directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load with automatic recovery
    ///
    /// Only corruption (a JSON error) triggers recovery. I/O failures and
    /// unsupported versions are returned to the caller.
    async fn load_with_recovery(&self) -> Result<AddressBook, Error> {
        let err = match Self::load_file(&self.path).await {
            Ok(book) => {
                tracing::debug!(
                    "Loaded address book from {}: {} contact(s)",
                    self.path.display(),
                    book.len()
                );
                return Ok(book);
            }
            Err(err @ Error::Json(_)) => err,
            Err(other) => return Err(other),
        };

        tracing::warn!(
            "Address book file {} appears corrupted: {}. Attempting recovery from backup.",
            self.path.display(),
            err
        );

        let backup_path = Self::backup_path(&self.path);
        if !backup_path.exists() {
            tracing::warn!("No backup file found. Starting with an empty address book.");
            return Ok(AddressBook::new());
        }

        match Self::load_file(&backup_path).await {
            Ok(book) => {
                tracing::info!("Recovered address book from backup: {} contact(s)", book.len());
                if let Err(restore_err) = fs::copy(&backup_path, &self.path).await {
                    tracing::error!(
                        "Failed to restore {} from backup: {}",
                        self.path.display(),
                        restore_err
                    );
                }
                Ok(book)
            }
            Err(backup_err) => {
                tracing::error!(
                    "Backup also unreadable: {}. Starting with an empty address book.",
                    backup_err
                );
                Ok(AddressBook::new())
            }
        }
    }

    async fn load_file(path: &Path) -> Result<AddressBook, Error> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Address book file does not exist: {}", path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => {
                return Err(Error::book_store(format!(
                    "Failed to read address book file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let file: BookFileIn = serde_json::from_str(&content)?;

        if file.version > BOOK_FILE_VERSION {
            return Err(Error::UnsupportedVersion {
                found: file.version,
                supported: BOOK_FILE_VERSION,
            });
        }

        Ok(file.contacts)
    }

    async fn write_file(&self, book: &AddressBook) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&BookFileOut {
            version: BOOK_FILE_VERSION,
            contacts: book,
        })?;

        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path).await.map_err(|e| {
                Error::book_store(format!(
                    "Failed to create temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.write_all(json.as_bytes()).await.map_err(|e| {
                Error::book_store(format!(
                    "Failed to write to temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.flush().await.map_err(|e| {
                Error::book_store(format!(
                    "Failed to flush temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
        }

        if self.path.exists() {
            let backup_path = Self::backup_path(&self.path);
            if let Err(e) = fs::copy(&self.path, &backup_path).await {
                tracing::warn!("Failed to create backup: {}", e);
            }
        }

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::book_store(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            "Saved {} contact(s) to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone();
        temp.set_extension("tmp");
        temp
    }

    fn backup_path(path: &Path) -> PathBuf {
        let mut backup = path.to_path_buf();
        backup.set_extension("backup");
        backup
    }
}

#[async_trait]
impl BookStore for FileBookStore {
    async fn load(&self) -> Result<AddressBook, Error> {
        self.load_with_recovery().await
    }

    async fn save(&self, book: &AddressBook) -> Result<(), Error> {
        self.write_file(book).await
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
