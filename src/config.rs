//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 3600;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Mark the session cookie `Secure`; enable when served over HTTPS.
    pub cookie_secure: bool,
    pub session_idle_ttl: Duration,
    pub session_sweep_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            cookie_secure: false,
            session_idle_ttl: Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS),
            session_sweep_interval: Duration::from_secs(DEFAULT_SESSION_SWEEP_INTERVAL_SECS),
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    /// - `SESSION_IDLE_TTL_SECS`: default 3600
    /// - `SESSION_SWEEP_INTERVAL_SECS`: default 60
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let cookie_secure = match lookup("COOKIE_SECURE") {
            None => false,
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::InvalidValue { key: "COOKIE_SECURE", value: raw })?
            }
        };
        let ttl_secs = parse_or("SESSION_IDLE_TTL_SECS", lookup("SESSION_IDLE_TTL_SECS"), DEFAULT_SESSION_IDLE_TTL_SECS)?;
        let sweep_secs = parse_or(
            "SESSION_SWEEP_INTERVAL_SECS",
            lookup("SESSION_SWEEP_INTERVAL_SECS"),
            DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
        )?;
        if sweep_secs == 0 {
            return Err(ConfigError::InvalidValue { key: "SESSION_SWEEP_INTERVAL_SECS", value: "0".into() });
        }

        Ok(Self {
            bind_addr,
            port,
            cookie_secure,
            session_idle_ttl: Duration::from_secs(ttl_secs),
            session_sweep_interval: Duration::from_secs(sweep_secs),
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
