//! Plugin Error Handling
//!
//! Two failure levels exist. A folder that cannot be scanned aborts the whole
//! bootstrap ([`DiscoveryError`]); a single plugin module that cannot be
//! loaded is reported and skipped ([`ModuleLoadError`]).

use crate::services::api::FileSystemError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for plugin operations
pub type PluginResult<T> = std::result::Result<T, ModuleLoadError>;

/// Error a plugin constructor may return
pub type ConstructorError = Box<dyn std::error::Error + Send + Sync>;

/// A plugin folder could not be scanned
#[derive(Debug, Error)]
#[error("could not scan plugin folder {}: {source}", folder.display())]
pub struct DiscoveryError {
    pub folder: PathBuf,
    #[source]
    pub source: FileSystemError,
}

/// One plugin module could not be loaded, instantiated or registered
#[derive(Debug, Error)]
pub enum ModuleLoadError {
    #[error("could not read plugin manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FileSystemError,
    },

    #[error("plugin manifest {} is not valid UTF-8", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid plugin manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("plugin manifest {} names unknown provider '{provider}'", path.display())]
    UnknownProvider { path: PathBuf, provider: String },

    #[error("could not construct provider '{provider}' from {}: {source}", path.display())]
    Construction {
        path: PathBuf,
        provider: String,
        #[source]
        source: ConstructorError,
    },

    #[error("plugin module {} panicked while loading: {message}", path.display())]
    Panicked { path: PathBuf, message: String },
}

impl ModuleLoadError {
    /// Manifest file the failure belongs to
    pub fn path(&self) -> &Path {
        match self {
            ModuleLoadError::Read { path, .. }
            | ModuleLoadError::Encoding { path, .. }
            | ModuleLoadError::Parse { path, .. }
            | ModuleLoadError::UnknownProvider { path, .. }
            | ModuleLoadError::Construction { path, .. }
            | ModuleLoadError::Panicked { path, .. } => path,
        }
    }
}
