//! # HTTP Server Module
//!
//! Axum server exposing the bookshelf API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - Create and list books
//! - `/books/:id` - Fetch, replace and delete a single book

pub mod book_routes;
pub mod config;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use book_routes::BookState;
pub use config::HttpServerConfig;
pub use response::{Envelope, EnvelopeStatus};
pub use server::HttpServer;
