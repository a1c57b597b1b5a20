use crate::error::ConfigError;
use crate::http::connection::DEFAULT_MAX_HEADER_BYTES;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "SEARCHD_CONFIG";
/// Overrides `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";
/// Overrides `server.workers`.
pub const WORKERS_ENV: &str = "SEARCHD_WORKERS";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub index: IndexConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Number of connections served concurrently.
    pub workers: usize,
    /// Accepted connections waiting for a worker; `None` is unbounded.
    pub queue_capacity: Option<usize>,
    pub max_header_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub prefix: String,
    pub root: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directory ingested into the index at startup.
    pub corpus_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            workers: 100,
            queue_capacity: None,
            max_header_bytes: DEFAULT_MAX_HEADER_BYTES,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            prefix: "/static/".to_string(),
            root: PathBuf::from("./static"),
        }
    }
}

impl Config {
    /// Loads the file named by `SEARCHD_CONFIG` (or defaults), then applies
    /// the `LISTEN` and `SEARCHD_WORKERS` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                serde_yaml::from_str(&raw)?
            }
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }
        if let Ok(workers) = std::env::var(WORKERS_ENV) {
            cfg.server.workers = workers.parse().map_err(|_| ConfigError::Invalid {
                key: WORKERS_ENV,
                reason: format!("{workers:?} is not a positive integer"),
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.workers == 0 {
            return Err(ConfigError::Invalid {
                key: "server.workers",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.server.queue_capacity == Some(0) {
            return Err(ConfigError::Invalid {
                key: "server.queue_capacity",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        let prefix = &self.static_files.prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(ConfigError::Invalid {
                key: "static_files.prefix",
                reason: format!("{prefix:?} must start and end with '/'"),
            });
        }
        Ok(())
    }
}
