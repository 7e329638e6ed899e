//! Configuration management for the Roadkill server
//!
//! This module handles loading and accessing application configuration.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};

use crate::startup::logging::LoggingConfig;

use super::constants::{
    DB_CONNECT_TIMEOUT_MS, DB_SERVER_SELECTION_TIMEOUT_MS, DB_URL_PROPERTY,
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_DB_URL, DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT,
    DEFAULT_SERVER_SELECTION_TIMEOUT_MS, LOGS_CONSOLE_PROPERTY, LOGS_FILE_PROPERTY,
    LOGS_LEVEL_PROPERTY, LOGS_PATH_PROPERTY, ROADKILL_INSTALLED, ROADKILL_VERSION,
    SERVER_ADDRESS_PROPERTY, SERVER_PORT_PROPERTY,
};

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(long = "db-url", env = "ROADKILL_DB_URL")]
    database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "log-dir")]
    log_dir: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("roadkill")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml").required(false));

        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override(DB_URL_PROPERTY, v)
                .expect("Failed to set database URL override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override(SERVER_PORT_PROPERTY, i64::from(v))
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.log_dir {
            config_builder = config_builder
                .set_override(LOGS_PATH_PROPERTY, v)
                .expect("Failed to set log directory override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    /// Wrap an already-built `Config`; used by tests and embedded setups.
    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    // ========================================================================
    // Application configuration
    // ========================================================================

    /// The product version stamped into the settings document during
    /// provisioning.
    pub fn version(&self) -> String {
        self.config
            .get_string(ROADKILL_VERSION)
            .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
    }

    /// Whether installation has already been completed.
    pub fn installed(&self) -> bool {
        self.config.get_bool(ROADKILL_INSTALLED).unwrap_or(false)
    }

    // ========================================================================
    // Database configuration
    // ========================================================================

    pub fn connection_string(&self) -> String {
        self.config
            .get_string(DB_URL_PROPERTY)
            .unwrap_or_else(|_| DEFAULT_DB_URL.to_string())
    }

    pub fn connect_timeout(&self) -> Duration {
        let millis = self
            .config
            .get_int(DB_CONNECT_TIMEOUT_MS)
            .map(|v| v as u64)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS);

        Duration::from_millis(millis)
    }

    pub fn server_selection_timeout(&self) -> Duration {
        let millis = self
            .config
            .get_int(DB_SERVER_SELECTION_TIMEOUT_MS)
            .map(|v| v as u64)
            .unwrap_or(DEFAULT_SERVER_SELECTION_TIMEOUT_MS);

        Duration::from_millis(millis)
    }

    // ========================================================================
    // Server configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT_PROPERTY)
            .unwrap_or(i64::from(DEFAULT_SERVER_PORT)) as u16
    }

    // ========================================================================
    // Logging configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string(LOGS_PATH_PROPERTY).ok(),
            self.config.get_bool(LOGS_CONSOLE_PROPERTY).unwrap_or(true),
            self.config.get_bool(LOGS_FILE_PROPERTY).unwrap_or(false),
            self.config
                .get_string(LOGS_LEVEL_PROPERTY)
                .unwrap_or_else(|_| "info".to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration(pairs: &[(&str, &str)]) -> Configuration {
        let mut builder = Config::builder();
        for (key, value) in pairs {
            builder = builder.set_override(*key, *value).unwrap();
        }
        Configuration::from_config(builder.build().unwrap())
    }

    #[test]
    fn test_defaults() {
        let configuration = configuration(&[]);
        assert_eq!(configuration.version(), env!("CARGO_PKG_VERSION"));
        assert!(!configuration.installed());
        assert_eq!(configuration.connection_string(), DEFAULT_DB_URL);
        assert_eq!(configuration.server_port(), DEFAULT_SERVER_PORT);
        assert_eq!(
            configuration.connect_timeout(),
            Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS)
        );
    }

    #[test]
    fn test_overrides() {
        let configuration = configuration(&[
            (ROADKILL_VERSION, "9.9.9"),
            (ROADKILL_INSTALLED, "true"),
            (DB_URL_PROPERTY, "mongodb://db.internal/wiki"),
            (SERVER_PORT_PROPERTY, "9000"),
        ]);

        assert_eq!(configuration.version(), "9.9.9");
        assert!(configuration.installed());
        assert_eq!(configuration.connection_string(), "mongodb://db.internal/wiki");
        assert_eq!(configuration.server_port(), 9000);
    }
}
