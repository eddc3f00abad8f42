// Runtime configuration from the environment
use crate::api_client::{ClientConfig, ClientError, DEFAULT_BASE_URL};
use crate::booking::DEFAULT_SUBMISSION_DELAY_MS;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "VELOCITYX_API_BASE_URL";
pub const ENV_TOKEN: &str = "VELOCITYX_API_TOKEN";
pub const ENV_TIMEOUT_MS: &str = "VELOCITYX_TIMEOUT_MS";
pub const ENV_BOOKING_DELAY_MS: &str = "VELOCITYX_BOOKING_DELAY_MS";
pub const ENV_CACHE_TTL_SECONDS: &str = "VELOCITYX_CACHE_TTL_SECONDS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub api_token: Option<String>,
    pub booking_delay_ms: u64,
    pub cache_ttl_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            api_token: None,
            booking_delay_ms: DEFAULT_SUBMISSION_DELAY_MS,
            cache_ttl_seconds: 60,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Same as from_env with an injectable source, so tests never touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            client: ClientConfig {
                base_url: lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout_ms: parse_or(&lookup, ENV_TIMEOUT_MS, defaults.client.timeout_ms)?,
            },
            api_token: lookup(ENV_TOKEN).filter(|t| !t.is_empty()),
            booking_delay_ms: parse_or(&lookup, ENV_BOOKING_DELAY_MS, defaults.booking_delay_ms)?,
            cache_ttl_seconds: parse_or(&lookup, ENV_CACHE_TTL_SECONDS, defaults.cache_ttl_seconds)?,
        })
    }

    pub fn booking_delay(&self) -> Duration {
        Duration::from_millis(self.booking_delay_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ClientError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ClientError::ConfigError(format!("{} is not a valid number: {}", key, raw))),
        None => Ok(default),
    }
}
