//! # Configuration
//!
//! Process configuration, resolved once at startup:
//! defaults, then an optional JSON file, then environment variables.
//!
//! | Variable | Field |
//! |---|---|
//! | `RECORDS_TABLE` (or `TABLE_NAME`) | `table_name` |
//! | `RECORDS_STORE` | `store` |
//! | `RECORDS_DATA_DIR` | `data_dir` |
//! | `HOST` | `host` |
//! | `PORT` | `port` |
//! | `LOG_FORMAT` | `log_format` |

mod errors;

pub use errors::{ConfigError, ConfigResult};

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::store::{FileStore, MemoryStore, RecordStore};

/// Which store implementation backs the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    File,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            other => Err(ConfigError::invalid("store", other)),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::invalid("log_format", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Table the service reads and writes (default: "records")
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Store backend (default: memory)
    #[serde(default = "default_store")]
    pub store: StoreBackend,

    /// Directory holding table files for the file backend (default: "./data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// HTTP bind settings
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Log output format (default: pretty)
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

fn default_table_name() -> String {
    "records".to_string()
}

fn default_store() -> StoreBackend {
    StoreBackend::Memory
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
            store: default_store(),
            data_dir: default_data_dir(),
            http: HttpServerConfig::default(),
            log_format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from an optional file plus the process
    /// environment.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with an explicit variable lookup.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table) = lookup("RECORDS_TABLE").or_else(|| lookup("TABLE_NAME")) {
            self.table_name = table;
        }
        if let Some(store) = lookup("RECORDS_STORE") {
            self.store = store.parse()?;
        }
        if let Some(dir) = lookup("RECORDS_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup("HOST") {
            self.http.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("port", &port))?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.log_format = format.parse()?;
        }
        Ok(())
    }

    /// Table names follow DynamoDB's rule: 3 to 255 characters from
    /// `[A-Za-z0-9_.-]`.
    pub fn validate(&self) -> ConfigResult<()> {
        let name = &self.table_name;
        let valid_chars = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

        if !(3..=255).contains(&name.len()) || !valid_chars {
            return Err(ConfigError::invalid("table_name", name));
        }
        Ok(())
    }

    /// Build the store this configuration selects
    pub fn build_store(&self) -> Arc<dyn RecordStore> {
        match self.store {
            StoreBackend::Memory => Arc::new(MemoryStore::new(&self.table_name)),
            StoreBackend::File => Arc::new(FileStore::new(&self.data_dir, &self.table_name)),
        }
    }
}
