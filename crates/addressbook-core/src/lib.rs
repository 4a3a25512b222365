// # addressbook-core
//
// Core library for the addressbook contact manager.
//
// ## Architecture Overview
//
// - **fields**: validated value types (`Name`, `Phone`, `Birthday`)
// - **record**: one contact and its mutations
// - **book**: `AddressBook`, the ordered collection of records
// - **commands**: the closed command table and the line dispatcher
// - **BookStore**: trait for loading and saving an address book
// - **state**: file and memory `BookStore` implementations
// - **session**: the read-dispatch-print loop, load on open, save on exit
//
// ## Design Principles
//
// 1. **Library-First**: the binary only wires stdin/stdout to `dispatch`
// 2. **Explicit ownership**: the caller owns the `AddressBook` and lends it
//    to each command; there is no process-wide instance
// 3. **Errors as messages**: user-facing error kinds render as UI text at the
//    handler boundary and never end the session

pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;
pub mod session;
pub mod state;
pub mod traits;

// Re-export core types for convenience
pub use book::AddressBook;
pub use commands::{Command, CommandContext, Outcome, dispatch};
pub use config::{AppConfig, StoreConfig};
pub use error::{Error, Result};
pub use fields::{Birthday, Name, Phone};
pub use record::Record;
pub use session::Session;
pub use state::{FileBookStore, MemoryBookStore, open_store};
pub use traits::BookStore;
