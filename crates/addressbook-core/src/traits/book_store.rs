// # Book Store Trait
//
// Defines the interface for persisting an address book between sessions.
//
// ## Contract
//
// - `load` on a store that has never been saved returns an empty book
// - `save` replaces the stored snapshot wholesale
// - `save` followed by `load` returns a book equal to the one saved:
//   same records, same order, same phones and birthdays
//
// ## Implementations
//
// - `FileBookStore`: versioned JSON file with backup recovery
// - `MemoryBookStore`: keeps the snapshot in memory (tests, dry runs)

use async_trait::async_trait;

use crate::book::AddressBook;

/// Trait for address book persistence backends
///
/// The interactive loop owns the live `AddressBook`; a store only ever sees
/// snapshots of it, at startup (`load`) and at shutdown (`save`).
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Load the last saved snapshot
    ///
    /// # Returns
    ///
    /// - `Ok(AddressBook)`: the saved book, or an empty one if nothing was saved
    /// - `Err(Error)`: storage error that recovery could not handle
    async fn load(&self) -> Result<AddressBook, crate::Error>;

    /// Overwrite the stored snapshot with `book`
    async fn save(&self, book: &AddressBook) -> Result<(), crate::Error>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;
}
