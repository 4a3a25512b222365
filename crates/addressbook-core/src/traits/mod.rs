// # Core Traits
//
// Seams between the address book and its surroundings.

pub mod book_store;

pub use book_store::BookStore;
