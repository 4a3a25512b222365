// # Memory Book Store
//
// In-memory implementation of BookStore.
//
// The snapshot lives only as long as the store value. Useful for tests and
// for sessions that should not touch the filesystem.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Error;
use crate::book::AddressBook;
use crate::traits::book_store::BookStore;

/// In-memory book store
///
/// Clones share the same snapshot, so a test can keep one handle and give
/// the other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookStore {
    inner: Arc<RwLock<Option<AddressBook>>>,
}

impl MemoryBookStore {
    /// Create a store with nothing saved yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(book))),
        }
    }

    /// Whether `save` has been called (or the store was seeded)
    pub async fn has_snapshot(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn load(&self) -> Result<AddressBook, Error> {
        Ok(self.inner.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, book: &AddressBook) -> Result<(), Error> {
        *self.inner.write().await = Some(book.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
