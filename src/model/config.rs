use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "tasksync.toml";

const DEFAULT_ENDPOINT: &str = "/api/tasks";

/// Error type for configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no base URL configured: pass --base-url, set TASKSYNC_BASE_URL, or add [gateway] base_url to tasksync.toml")]
    MissingBaseUrl,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the remote task service lives.
///
/// Resolved once at startup and injected into the gateway at construction;
/// nothing reads ambient configuration after that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Scheme + host (+ port), e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Path prefix for the task routes, e.g. `/api/tasks`.
    pub endpoint: String,
}

/// On-disk shape of tasksync.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    gateway: GatewaySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GatewaySection {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    endpoint: Option<String>,
}

impl GatewayConfig {
    /// Resolve the gateway location from, in priority order: explicit flag
    /// values (clap has already merged env vars into these), the config
    /// file, then the built-in default endpoint. A base URL is required;
    /// the endpoint is not.
    pub fn resolve(
        base_url: Option<String>,
        endpoint: Option<String>,
        config_path: Option<&Path>,
    ) -> Result<GatewayConfig, ConfigError> {
        let file = match config_path {
            Some(path) => Some(read_config_file(path)?),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Some(read_config_file(default)?)
                } else {
                    None
                }
            }
        };
        let file = file.unwrap_or_default();

        let base_url = base_url
            .or(file.gateway.base_url)
            .ok_or(ConfigError::MissingBaseUrl)?;
        let endpoint = endpoint
            .or(file.gateway.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(GatewayConfig { base_url, endpoint })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}
