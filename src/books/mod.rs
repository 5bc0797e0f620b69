//! # Books
//!
//! Book records, write validation, list filtering and the in-memory store.
//! Nothing in here knows about routing; the HTTP layer lives in
//! [`crate::http_server`].

pub mod book;
pub mod errors;
pub mod filter;
pub mod store;
pub mod validation;

pub use book::{Book, BookFields, BookPayload, BookSummary};
pub use errors::{BookError, BookResult, WriteAction};
pub use filter::{BookFilter, ListQuery};
pub use store::BookStore;
pub use validation::validate_payload;
