use std::{
    fmt,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use stationhub_error::ConfigError;

use super::Cli;
use crate::logging::LoggingConfig;

/// Префикс переменных окружения.
pub const ENV_PREFIX: &str = "STATIONHUB";

/// Storage backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Memory,
    Persistent,
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub kind: StorageKind,
    /// Snapshot file used by the persistent store.
    pub snapshot_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub listen_address: String,
    pub workers: usize,
    pub seed_demo_data: bool,
    /// Requests slower than this are logged at WARN.
    pub slow_request_ms: u64,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Loads settings: defaults, then the optional file, then `STATIONHUB_*`
    /// environment variables (`__` separates nested keys).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let cfg = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::Load {
                reason: e.to_string(),
            })?;

        let settings: Settings = cfg.try_deserialize().map_err(|e| ConfigError::Load {
            reason: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Command line flags take precedence over every loaded source.
    pub fn apply_cli(
        &mut self,
        cli: &Cli,
    ) {
        if let Some(listen) = &cli.listen {
            self.listen_address = listen.clone();
        }
        if cli.seed {
            self.seed_demo_data = true;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        if self.workers == 0 {
            return Err(ConfigError::Invalid {
                field: "workers",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.storage.kind == StorageKind::Persistent
            && self.storage.snapshot_path.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid {
                field: "storage.snapshot_path",
                reason: "required for persistent storage".to_string(),
            });
        }
        self.logging.validate()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                field: "listen_address",
                reason: format!("'{}': {e}", self.listen_address),
            })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageKind::Memory,
            snapshot_path: PathBuf::from("data/stationhub.json"),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_address: "127.0.0.1:8080".to_string(),
            workers: num_cpus::get().max(1),
            seed_demo_data: false,
            slow_request_ms: 500,
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            StorageKind::Memory => f.write_str("memory"),
            StorageKind::Persistent => f.write_str("persistent"),
        }
    }
}
