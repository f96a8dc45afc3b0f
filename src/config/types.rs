//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DB_PATH, DEFAULT_LISTEN_ADDR, DEFAULT_MODEL_NAME, DEFAULT_MODEL_URL,
    DUCKDUCKGO_API_URL, DUCKDUCKGO_HTML_URL, EXTERNAL_REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Service configuration.
///
/// Parsed from the command line (with environment fallbacks for secrets), or
/// built programmatically starting from `Config::default()`.
///
/// # Examples
///
/// ```no_run
/// use catsite::Config;
///
/// let config = Config {
///     auth_secret: Some("s3cret".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catsite",
    version,
    about = "Classifies domains into industries and regions over an HTTP API"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// SQLite database path
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Shared secret required in the auth header or cookie
    #[arg(long, env = "CATSITE_AUTH", hide_env_values = true)]
    pub auth_secret: Option<String>,

    /// Base URL of an OpenAI-compatible chat API
    #[arg(long, env = "CATSITE_MODEL_URL", default_value = DEFAULT_MODEL_URL)]
    pub model_url: String,

    /// Chat model name
    #[arg(long, env = "CATSITE_MODEL", default_value = DEFAULT_MODEL_NAME)]
    pub model_name: String,

    /// Bearer token for the chat API
    #[arg(long, env = "CATSITE_MODEL_API_KEY", hide_env_values = true)]
    pub model_api_key: Option<String>,

    /// DuckDuckGo instant-answer endpoint
    #[arg(long, default_value = DUCKDUCKGO_API_URL, hide = true)]
    pub abstract_url: String,

    /// DuckDuckGo HTML search endpoint
    #[arg(long, default_value = DUCKDUCKGO_HTML_URL, hide = true)]
    pub search_url: String,

    /// Timeout for each enrichment or model request in seconds
    #[arg(long, default_value_t = EXTERNAL_REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR.to_string(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            auth_secret: None,
            model_url: DEFAULT_MODEL_URL.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_api_key: None,
            abstract_url: DUCKDUCKGO_API_URL.to_string(),
            search_url: DUCKDUCKGO_HTML_URL.to_string(),
            timeout_seconds: EXTERNAL_REQUEST_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::new(
                "listen",
                format!("'{}' is not a socket address (expected host:port)", self.listen),
            ));
        }
        match self.auth_secret.as_deref() {
            None | Some("") => {
                return Err(ConfigError::new(
                    "auth_secret",
                    "a shared secret is required (set --auth-secret or CATSITE_AUTH)",
                ))
            }
            Some(_) => {}
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        for (field, value) in [
            ("model_url", &self.model_url),
            ("abstract_url", &self.abstract_url),
            ("search_url", &self.search_url),
        ] {
            if url::Url::parse(value).is_err() {
                return Err(ConfigError::new(field, format!("'{}' is not a URL", value)));
            }
        }
        Ok(())
    }

    /// The listen address, once validated.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen
            .parse()
            .map_err(|_| ConfigError::new("listen", format!("'{}' is not a socket address", self.listen)))
    }
}
