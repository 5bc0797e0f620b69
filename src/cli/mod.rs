//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - config: Print the effective configuration

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{run, run_command, serve, show_config, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
