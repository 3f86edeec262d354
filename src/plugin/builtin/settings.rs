//! Settings file plugin
//!
//! A JSON settings document exposed as a provider. The document path comes
//! from the manifest (`settings.path`), defaulting to `config/settings.json`.

use crate::plugin::context::PluginContext;
use crate::plugin::error::ConstructorError;
use crate::registry::api::{ServiceProvider, ServiceRegistry, SERVICE_PROVIDER};
use crate::services::api::{FileSystemCapability, JsonFileStore, JSON_FILE_SERVICE};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

pub const SETTINGS_FILE_SERVICE: &str = "SettingsFileService";
pub const SETTINGS_PLUGIN_ID: &str = "settings-file-service";
pub const DEFAULT_SETTINGS_FILE: &str = "config/settings.json";

#[derive(Debug)]
pub struct SettingsFileService {
    path: PathBuf,
    registry: Weak<ServiceRegistry>,
}

impl SettingsFileService {
    pub fn new(path: impl Into<PathBuf>, registry: Weak<ServiceRegistry>) -> Self {
        Self {
            path: path.into(),
            registry,
        }
    }

    fn construct(context: &PluginContext) -> Result<Arc<dyn ServiceProvider>, ConstructorError> {
        let path = match context.settings().get("path") {
            None => PathBuf::from(DEFAULT_SETTINGS_FILE),
            Some(value) => value
                .as_str()
                .map(PathBuf::from)
                .ok_or("setting 'path' must be a string")?,
        };
        Ok(Arc::new(Self::new(path, context.registry_handle())))
    }
}

impl JsonFileStore for SettingsFileService {
    fn path(&self) -> &Path {
        &self.path
    }

    fn file_system(&self) -> Option<Arc<dyn FileSystemCapability>> {
        self.registry.upgrade()?.resolve_file_system()
    }
}

impl ServiceProvider for SettingsFileService {
    fn ancestry(&self) -> &'static [&'static str] {
        &[SETTINGS_FILE_SERVICE, JSON_FILE_SERVICE, SERVICE_PROVIDER]
    }
}

crate::provider_plugin!(SETTINGS_PLUGIN_ID, SettingsFileService::construct);
