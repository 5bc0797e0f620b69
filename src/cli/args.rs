//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>] [--log-level <level>]
//! - bookshelf config [--config <path>] [--host <host>] [--port <port>] [--log-level <level>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - an in-memory book management REST API
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ConfigArgs),

    /// Print the effective configuration as JSON and exit
    Config(ConfigArgs),
}

/// Configuration sources shared by all commands; flags win over the file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Minimum log severity (trace, info, warn, error, fatal)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
