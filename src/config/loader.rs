//! Configuration loading from the process environment.

use std::env;

use crate::config::schema::{Config, LogFormat, LogLevel};

/// Build a [`Config`] from environment variables.
///
/// Anything unset, empty, or unparsable falls back to the default for that
/// field.
pub fn load_from_env() -> Config {
    let defaults = Config::default();

    Config {
        host: get_env("HOST", &defaults.host),
        port: get_env("PORT", &defaults.port),
        log_level: env_value("LOG_LEVEL")
            .map(|value| LogLevel::parse_or_default(&value))
            .unwrap_or(defaults.log_level),
        log_format: env_value("LOG_FORMAT")
            .map(|value| LogFormat::parse_or_default(&value))
            .unwrap_or(defaults.log_format),
        capture_request_body: get_bool_env("ENABLE_REQUEST_BODY", defaults.capture_request_body),
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn get_env(key: &str, default: &str) -> String {
    env_value(key).unwrap_or_else(|| default.to_string())
}

/// Boolean environment lookup.
///
/// A value that is present but unparsable keeps the default, it does not
/// become `false`.
fn get_bool_env(key: &str, default: bool) -> bool {
    env_value(key)
        .and_then(|value| parse_bool(&value))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
