//! Observable events for the bookshelf service
//!
//! Every log line names exactly one of these events.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Listener closed, in-flight requests drained
    ShutdownComplete,

    // Requests
    /// An HTTP request finished
    RequestHandled,

    // Book mutations
    /// Book appended to the store
    BookCreated,
    /// Book replaced in place
    BookUpdated,
    /// Book removed from the store
    BookDeleted,
    /// Write rejected by validation or lookup
    BookRejected,
    /// Book missing from the store right after insertion
    BookInsertFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "BOOKSHELF_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::RequestHandled => "REQUEST_HANDLED",

            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::BookRejected => "BOOK_REJECTED",
            Event::BookInsertFailed => "BOOK_INSERT_FAILED",
        }
    }

    /// Default severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestHandled => Severity::Trace,
            Event::BookRejected => Severity::Warn,
            Event::BookInsertFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
