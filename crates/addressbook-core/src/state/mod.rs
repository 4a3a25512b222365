// # Book Store Implementations
//
// Implementations of the BookStore trait for different persistence
// strategies, plus construction from configuration.

pub mod file;
pub mod memory;

pub use file::{BOOK_FILE_VERSION, DEFAULT_BOOK_FILE, FileBookStore};
pub use memory::MemoryBookStore;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::traits::BookStore;

/// Build the book store described by `config`
pub async fn open_store(config: &StoreConfig) -> Result<Box<dyn BookStore>> {
    let store: Box<dyn BookStore> = match config {
        StoreConfig::File { path } => Box::new(FileBookStore::new(path).await?),
        StoreConfig::Memory => Box::new(MemoryBookStore::new()),
    };
    tracing::debug!("Opened book store: {}", store.describe());
    Ok(store)
}
