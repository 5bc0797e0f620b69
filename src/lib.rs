//! bookshelf - an in-memory book management REST API
//!
//! Books are created, listed, filtered, fetched, replaced and deleted over
//! HTTP; every response is a `{status, message, data?}` JSON envelope.

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
