//! Layered configuration.
//!
//! A [`Config`] starts from defaults or a JSON file, then has two
//! [`Overrides`] layers applied on top: first the environment, then the
//! command line. A layer only touches the fields it actually sets.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ServerConfig;
use crate::cli::Args;

pub const ENV_HOST: &str = "SESSION_VAULT_HOST";
pub const ENV_PORT: &str = "SESSION_VAULT_PORT";
pub const ENV_STORE_ADDR: &str = "SESSION_VAULT_STORE_ADDR";
pub const ENV_STORE_OPTIONS: &str = "SESSION_VAULT_STORE_OPTIONS";
pub const ENV_LOG_LEVEL: &str = "SESSION_VAULT_LOG_LEVEL";

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerSection,
    /// Passed verbatim to `SessionManager::init`.
    pub store: StoreSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub graceful_shutdown: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            graceful_shutdown: true,
        }
    }
}

/// Backing store address and free-form options.
///
/// The in-memory store ignores both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
    pub address: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Bare level (`debug`) or a full `EnvFilter` directive.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// One layer of optional settings.
///
/// `None` and an empty option list leave the underlying value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub store_address: Option<String>,
    /// Replaces the whole option list when non-empty.
    pub store_options: Vec<String>,
    pub log_level: Option<String>,
}

impl Overrides {
    /// Read the `SESSION_VAULT_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a layer from any variable lookup.
    ///
    /// `RUST_LOG` is used for the log level when `SESSION_VAULT_LOG_LEVEL`
    /// is unset. Store options are comma separated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var(ENV_HOST)
            .map(|v| v.trim().parse().map_err(|_| ConfigError::InvalidVar(ENV_HOST, v)))
            .transpose()?;
        let port = var(ENV_PORT)
            .map(|v| v.trim().parse().map_err(|_| ConfigError::InvalidVar(ENV_PORT, v)))
            .transpose()?;
        let store_options = var(ENV_STORE_OPTIONS)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            store_address: var(ENV_STORE_ADDR),
            store_options,
            log_level: var(ENV_LOG_LEVEL).or_else(|| var("RUST_LOG")),
        })
    }
}

impl Config {
    /// Parse a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overlay the fields `layer` sets.
    pub fn apply(&mut self, layer: &Overrides) {
        if let Some(host) = layer.host {
            self.server.host = host.to_string();
        }
        if let Some(port) = layer.port {
            self.server.port = port;
        }
        if let Some(address) = &layer.store_address {
            self.store.address = address.clone();
        }
        if !layer.store_options.is_empty() {
            self.store.options = layer.store_options.clone();
        }
        if let Some(level) = &layer.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Resolve `file > defaults`, then `env`, then the command line.
    pub fn resolve(args: &Args, env: &Overrides) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(env);
        config.apply(&args.overrides);
        Ok(config)
    }

    /// [`resolve`](Self::resolve) against the real process environment.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        Self::resolve(args, &Overrides::from_env()?)
    }

    /// Listener settings for the HTTP surface.
    pub fn server_config(&self) -> Result<ServerConfig, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.server.host.clone()))?;

        Ok(ServerConfig {
            addr: SocketAddr::new(ip, self.server.port),
            graceful_shutdown: self.server.graceful_shutdown,
        })
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid host address: {0}")]
    InvalidHost(String),

    #[error("invalid value for {0}: '{1}'")]
    InvalidVar(&'static str, String),
}
