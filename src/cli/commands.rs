//! CLI command implementations
//!
//! Configuration is resolved in three layers: built-in defaults, then the
//! optional JSON file, then command-line flags.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Event, Logger, Severity};

use super::args::{Command, ConfigArgs};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Configuration file structure
///
/// ```json
/// { "host": "127.0.0.1", "port": 9000, "cors_origins": [], "log_level": "info" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse configuration from file. Not validated until
    /// [`Config::resolve`] has applied the flag overrides.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Defaults or file, then flag overrides, then validation
    pub fn resolve(args: &ConfigArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(host) = &args.host {
            config.server.host = host.clone();
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Config(args) => show_config(&args),
    }
}

/// Start the HTTP server with an empty book store
pub fn serve(args: &ConfigArgs) -> CliResult<()> {
    let config = Config::resolve(args)?;

    Logger::set_min_severity(config.severity()?);
    Logger::event(
        Event::ConfigLoaded,
        &[
            ("addr", config.server.socket_addr().as_str()),
            ("log_level", config.log_level.as_str()),
        ],
    );

    let server = HttpServer::with_config(config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration
pub fn show_config(args: &ConfigArgs) -> CliResult<()> {
    let config = Config::resolve(args)?;
    write_json(&config)
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, value: serde_json::Value) -> std::path::PathBuf {
        let config_path = temp_dir.path().join("bookshelf.json");
        fs::write(&config_path, value.to_string()).unwrap();
        config_path
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::resolve(&ConfigArgs::default()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            json!({ "port": 5000, "cors_origins": ["http://localhost:3000"], "log_level": "warn" }),
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, json!({ "host": "0.0.0.0", "port": 5000 }));

        let args = ConfigArgs {
            config: Some(path),
            port: Some(7000),
            ..Default::default()
        };

        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(&temp_dir.path().join("absent.json"));
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookshelf.json");
        fs::write(&path, "{ not json").unwrap();

        let result = Config::load(&path);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_rejects_zero_port() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, json!({ "port": 0 }));
        let args = ConfigArgs {
            config: Some(path),
            ..Default::default()
        };
        assert_eq!(
            Config::resolve(&args).unwrap_err().code(),
            &CliErrorCode::ConfigError
        );
    }

    #[test]
    fn test_flag_overrides_invalid_file_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, json!({ "port": 0 }));

        let args = ConfigArgs {
            config: Some(path.clone()),
            port: Some(7000),
            ..Default::default()
        };
        assert_eq!(Config::resolve(&args).unwrap().server.port, 7000);

        let args = ConfigArgs {
            config: Some(path),
            ..Default::default()
        };
        assert!(Config::resolve(&args).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let args = ConfigArgs {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Config::resolve(&args).unwrap_err().code(),
            &CliErrorCode::ConfigError
        );
    }

    #[test]
    fn test_rejects_empty_host() {
        let args = ConfigArgs {
            host: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(Config::resolve(&args).is_err());
    }
}
