//! Loading a single plugin module
//!
//! Manifest → catalog lookup → construction → registration. Every failure on
//! the way is a [`ModuleLoadError`] scoped to that one module.

use crate::plugin::catalog::PluginCatalog;
use crate::plugin::context::PluginContext;
use crate::plugin::error::{ModuleLoadError, PluginResult};
use crate::plugin::manifest::PluginManifest;
use crate::registry::api::{CapabilitySet, ServiceRegistry};
use crate::services::api::FileSystemCapability;
use std::path::Path;
use std::sync::Arc;

/// What a successfully loaded module contributed to the registry
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModule {
    pub provider: String,
    pub capabilities: CapabilitySet,
}

/// Load the module described by the manifest at `path` and register it
pub async fn load_module(
    path: &Path,
    registry: Arc<ServiceRegistry>,
    catalog: &PluginCatalog,
    file_system: &dyn FileSystemCapability,
    data: Option<toml::Value>,
) -> PluginResult<LoadedModule> {
    let bytes = file_system
        .read(path)
        .await
        .map_err(|source| ModuleLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let contents = String::from_utf8(bytes).map_err(|source| ModuleLoadError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = PluginManifest::parse(&contents).map_err(|source| ModuleLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let constructor =
        catalog
            .get(&manifest.provider)
            .ok_or_else(|| ModuleLoadError::UnknownProvider {
                path: path.to_path_buf(),
                provider: manifest.provider.clone(),
            })?;

    let context = PluginContext::new(
        Arc::clone(&registry),
        manifest.settings,
        path.to_path_buf(),
        data,
    );
    let provider = constructor(&context).map_err(|source| ModuleLoadError::Construction {
        path: path.to_path_buf(),
        provider: manifest.provider.clone(),
        source,
    })?;

    let capabilities = registry.register(provider);
    Ok(LoadedModule {
        provider: manifest.provider,
        capabilities,
    })
}

/// Best-effort text of a panic payload
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
