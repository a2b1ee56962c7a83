//! Configuration for the demo server.

use broadcast::{ResolverConfig, DEFAULT_RELAY_HOST, DEFAULT_WATCH_PAGE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be true/false/1/0, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Demo server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub resolver: ResolverConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset and empty-string
    /// optional variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: "PORT",
                value,
            })?,
            None => 8080,
        };
        let resolver = resolver_from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            resolver,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relay-related variables: RELAY_HOST, RELAY_ESCAPE_NAMES, WATCH_PAGE.
pub fn resolver_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ResolverConfig, ConfigError> {
    let relay_host = match lookup("RELAY_HOST") {
        Some(value) if value.trim().is_empty() => return Err(ConfigError::Empty("RELAY_HOST")),
        Some(value) => value.trim().to_string(),
        None => DEFAULT_RELAY_HOST.to_string(),
    };
    let escape_names = match lookup("RELAY_ESCAPE_NAMES") {
        Some(value) => parse_bool("RELAY_ESCAPE_NAMES", value)?,
        None => false,
    };
    let watch_page = lookup("WATCH_PAGE")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_WATCH_PAGE.to_string());

    Ok(ResolverConfig {
        relay_host,
        escape_names,
        watch_page,
    })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
