//! Startup configuration, read from the environment once.

use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

const SECRETS_DIR: &str = "/run/secrets";

/// Token lifetimes are capped at one year.
const MAX_TOKEN_TTL_MINUTES: i64 = 365 * 24 * 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set and /run/secrets/{0} is missing or empty")]
    MissingSecret(String),

    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub token_ttl_minutes: i64,
    pub secret_key: String,
}

impl Config {
    /// Loads configuration from the process environment, falling back to
    /// `/run/secrets` for the signing key.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), read_secret)
    }

    /// Builds a configuration from arbitrary variable and secret sources.
    pub fn from_lookup(
        var: impl Fn(&str) -> Option<String>,
        secret: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let token_ttl_minutes: i64 = try_load(&var, "TOKEN_TTL_MINUTES", "60")?;
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&token_ttl_minutes) {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_MINUTES".into(),
                value: token_ttl_minutes.to_string(),
                reason: format!("must be between 1 and {MAX_TOKEN_TTL_MINUTES}"),
            });
        }

        Ok(Self {
            port: try_load(&var, "RUST_PORT", "8000")?,
            cors_origin: try_load(&var, "CORS_ORIGIN", "http://localhost:3000")?,
            token_ttl_minutes,
            secret_key: load_secret(&var, &secret, "SECRET_KEY")?,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("cors_origin", &self.cors_origin)
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish_non_exhaustive()
    }
}

fn try_load<T: FromStr>(
    var: impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            value,
            reason: e.to_string(),
        }
    })
}

fn load_secret(
    var: impl Fn(&str) -> Option<String>,
    secret: impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, ConfigError> {
    var(name)
        .or_else(|| secret(name))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingSecret(name.to_string()))
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("{SECRETS_DIR}/{secret_name}");

    read_to_string(&path)
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .ok()
}
