//! Plugin Context
//!
//! Everything a provider constructor receives: the registry it is being
//! injected into, the settings from its manifest and the caller's opaque
//! bootstrap data.

use crate::registry::api::ServiceRegistry;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

/// Construction-time context handed to provider constructors
pub struct PluginContext {
    registry: Arc<ServiceRegistry>,
    settings: toml::Table,
    manifest_path: PathBuf,
    data: Option<toml::Value>,
}

impl std::fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContext")
            .field("registry", &"ServiceRegistry")
            .field("settings", &self.settings)
            .field("manifest_path", &self.manifest_path)
            .finish()
    }
}

impl PluginContext {
    pub fn new(
        registry: Arc<ServiceRegistry>,
        settings: toml::Table,
        manifest_path: PathBuf,
        data: Option<toml::Value>,
    ) -> Self {
        Self {
            registry,
            settings,
            manifest_path,
            data,
        }
    }

    /// The registry the new provider will be registered into
    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    /// Non-owning registry handle for providers that keep it around
    ///
    /// Providers live inside the registry, so holding a strong reference
    /// back to it would form a cycle.
    pub fn registry_handle(&self) -> Weak<ServiceRegistry> {
        Arc::downgrade(&self.registry)
    }

    /// The `[settings]` table from the plugin manifest
    pub fn settings(&self) -> &toml::Table {
        &self.settings
    }

    /// A string setting, if present and a string
    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(|value| value.as_str())
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Opaque `data` from the bootstrap options
    pub fn data(&self) -> Option<&toml::Value> {
        self.data.as_ref()
    }
}
