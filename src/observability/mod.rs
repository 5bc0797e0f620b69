//! Observability for the bookshelf service
//!
//! Structured JSON line logging with typed events.
//!
//! ```ignore
//! use bookshelf::observability::{Event, Logger};
//!
//! Logger::event(Event::BookCreated, &[("book_id", "V1StGXR8_Z5jdHi6")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
