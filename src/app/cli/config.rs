//! TOML configuration file loading
//!
//! ```toml
//! [bootstrap]
//! load_plugins_from = ["plugins", "/opt/depinject/plugins"]
//! debug_on = false
//!
//! [log]
//! level = "debug"
//! ```

use crate::lifecycle::api::BootstrapOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "Depinject";
const CONFIG_FILE_NAME: &str = "depinject.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bootstrap: BootstrapOptions,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// `<config dir>/Depinject/depinject.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the configuration
///
/// An explicitly named file must exist. Without one the default path is
/// tried, and a missing default file yields the default configuration.
pub async fn load_config_file(config_file: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                log::debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    log::debug!("Loading configuration from {}", path.display());
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
}
