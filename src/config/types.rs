//! Configuration types.
//!
//! This module defines the library [`Config`] and the logging enums the CLI
//! exposes as flags.

use clap::ValueEnum;

use crate::config::constants::{API_USER_AGENT, DEFAULT_API_BASE_URL};

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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use macvendors::Config;
///
/// let config = Config {
///     timeout_seconds: Some(5),
///     ..Default::default()
/// };
/// assert_eq!(config.user_agent, "API Browser");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the endpoint templates are built on
    pub api_base_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds; `None` leaves the HTTP client without one
    pub timeout_seconds: Option<u64>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Full-lookup URL for `mac_address`, substituted verbatim.
    pub fn lookup_url(&self, mac_address: &str) -> String {
        format!("{}/{}/json", self.base(), mac_address)
    }

    /// Vendor-name URL for `mac_address`, substituted verbatim.
    pub fn vendor_name_url(&self, mac_address: &str) -> String {
        format!("{}/vendorname/{}", self.base(), mac_address)
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: API_USER_AGENT.to_string(),
            timeout_seconds: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
