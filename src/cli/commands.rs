//! CLI command implementations
//!
//! Boot sequence for `start`:
//! 1. Load configuration (defaults if the file is absent)
//! 2. Open the snapshot store; a corrupt snapshot aborts startup
//! 3. Build the record service and HTTP server
//! 4. Enter the serving loop

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{AppState, HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::service::RecordService;
use crate::store::SnapshotStore;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backing file for the record collection (default "./data.json")
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Host to bind to (default "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default 5050)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_file() -> String {
    "./data.json".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5050
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    fn validate(&self) -> CliResult<()> {
        if self.data_file.is_empty() {
            return Err(CliError::config("data_file must not be empty"));
        }
        if self.port == 0 {
            return Err(CliError::config("port must be > 0"));
        }
        Ok(())
    }

    fn server_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// `init`: write a default config file, refusing to overwrite
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }

    let config = Config::default();
    let contents = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
    fs::write(config_path, contents)?;

    Logger::info("config_written", &[("path", &config_path.display().to_string())]);
    Ok(())
}

/// `start`: boot and serve until terminated
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;

    let store = match SnapshotStore::open(&config.data_file) {
        Ok(store) => store,
        Err(e) => {
            Logger::fatal("snapshot_load_failed", &[("error", &e.to_string())]);
            return Err(e.into());
        }
    };

    Logger::info(
        "snapshot_loaded",
        &[
            ("path", config.data_file.as_str()),
            ("records", &store.len().to_string()),
        ],
    );

    let state = Arc::new(AppState::new(RecordService::new(store)));
    let server = HttpServer::new(config.server_config(), state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}
