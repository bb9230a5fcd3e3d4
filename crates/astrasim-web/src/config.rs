use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid listen address '{value}' in {key}")]
    InvalidListenAddr { key: &'static str, value: String },

    #[error("invalid boolean '{value}' in {key}, expected true/false/1/0")]
    InvalidBool { key: &'static str, value: String },
}

/// Runtime settings for the HTTP service.
///
/// # Environment Variables
///
/// | Setting | Primary Env Var | Fallback Env Var | Default |
/// |---------|-----------------|------------------|---------|
/// | listen_addr | `ASTRASIM_LISTEN_ADDR` | `LISTEN_ADDR` | `127.0.0.1:3000` |
/// | app_name | `ASTRASIM_APP_NAME` | `APP_NAME` | `AstraSim` |
/// | environment | `ASTRASIM_APP_ENV` | `APP_ENV` | `development` |
/// | debug | `ASTRASIM_APP_DEBUG` | `APP_DEBUG` | `true` |
/// | cors_origins | `ASTRASIM_CORS_ORIGINS` | `BACKEND_CORS_ORIGINS` | none |
/// | static_dir | `ASTRASIM_STATIC_DIR` | `STATIC_DIR` | none |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub listen_addr: SocketAddr,
    pub app_name: String,
    pub environment: String,
    pub version: String,
    pub debug: bool,
    pub cors_origins: Vec<String>,
    pub static_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            app_name: String::from("AstraSim"),
            environment: String::from("development"),
            version: String::from(env!("CARGO_PKG_VERSION")),
            debug: true,
            cors_origins: Vec::new(),
            static_dir: None,
        }
    }
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; the prefixed key wins over the plain one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &'static str, fallback: &'static str| {
            [primary, fallback].into_iter().find_map(|key| {
                lookup(key)
                    .map(|value| value.trim().to_owned())
                    .filter(|value| !value.is_empty())
                    .map(|value| (key, value))
            })
        };

        let mut config = Self::default();

        if let Some((key, value)) = read("ASTRASIM_LISTEN_ADDR", "LISTEN_ADDR") {
            config.listen_addr = value
                .parse()
                .map_err(|_| ConfigError::InvalidListenAddr { key, value })?;
        }
        if let Some((_, value)) = read("ASTRASIM_APP_NAME", "APP_NAME") {
            config.app_name = value;
        }
        if let Some((_, value)) = read("ASTRASIM_APP_ENV", "APP_ENV") {
            config.environment = value;
        }
        if let Some((key, value)) = read("ASTRASIM_APP_DEBUG", "APP_DEBUG") {
            config.debug = parse_bool(key, value)?;
        }
        if let Some((_, value)) = read("ASTRASIM_CORS_ORIGINS", "BACKEND_CORS_ORIGINS") {
            config.cors_origins = split_origins(&value);
        }
        if let Some((_, value)) = read("ASTRASIM_STATIC_DIR", "STATIC_DIR") {
            config.static_dir = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    pub fn with_listen_addr(mut self, listen_addr: SocketAddr) -> Self {
        self.listen_addr = listen_addr;
        self
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}
