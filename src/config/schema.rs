//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config snapshot can be logged or
//! round-tripped in diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime configuration, loaded once at process start.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Listener bind address (e.g., "0.0.0.0").
    pub host: String,

    /// Listener port. Kept as a string and joined with the host.
    pub port: String,

    /// Minimum severity emitted by the logging subsystem.
    pub log_level: LogLevel,

    /// Log output format (human-readable text or JSON).
    pub log_format: LogFormat,

    /// Whether request bodies are buffered and logged.
    pub capture_request_body: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: "8080".to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Text,
            capture_request_body: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        crate::config::loader::load_from_env()
    }

    /// The address string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Minimum log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name. Unrecognized values fall back to `info`.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parse a format name. Anything other than "json" selects text.
    pub fn parse_or_default(value: &str) -> Self {
        if value == "json" {
            Self::Json
        } else {
            Self::Text
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
