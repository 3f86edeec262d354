//! Plugin catalog
//!
//! Compile-time table of provider constructors. Plugin crates and modules
//! register themselves with the `provider_plugin!` macro; the catalog is
//! snapshotted from `inventory` once and can be extended at runtime.

use crate::plugin::context::PluginContext;
use crate::plugin::error::ConstructorError;
use crate::registry::api::ServiceProvider;
use std::collections::HashMap;
use std::sync::Arc;

pub use inventory;

/// Builds a provider instance for a plugin manifest
pub type ProviderConstructor =
    fn(&PluginContext) -> Result<Arc<dyn ServiceProvider>, ConstructorError>;

/// Entry for a provider in the compile-time registry
pub struct PluginEntry {
    pub id: &'static str,
    pub constructor: ProviderConstructor,
}

inventory::collect!(PluginEntry);

/// Register a provider constructor under a plugin identifier
///
/// ```ignore
/// depinject::provider_plugin!("mail-service", |ctx| Ok(Arc::new(MailService::new(ctx))));
/// ```
#[macro_export]
macro_rules! provider_plugin {
    ($id:expr, $constructor:expr) => {
        $crate::plugin::api::inventory::submit! {
            $crate::plugin::api::PluginEntry {
                id: $id,
                constructor: $constructor,
            }
        }
    };
}

/// Identifier to constructor mapping used while loading plugin modules
#[derive(Clone, Default)]
pub struct PluginCatalog {
    constructors: HashMap<String, ProviderConstructor>,
}

impl std::fmt::Debug for PluginCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginCatalog")
            .field("providers", &self.ids())
            .finish()
    }
}

impl PluginCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every `provider_plugin!` registration linked into the binary
    pub fn from_inventory() -> Self {
        let mut catalog = Self::new();
        for entry in inventory::iter::<PluginEntry>() {
            catalog.register(entry.id, entry.constructor);
        }
        log::debug!("Plugin catalog loaded: {:?}", catalog.ids());
        catalog
    }

    /// Add or replace a constructor; the last registration of an id wins
    pub fn register(&mut self, id: impl Into<String>, constructor: ProviderConstructor) -> &mut Self {
        let id = id.into();
        if self.constructors.insert(id.clone(), constructor).is_some() {
            log::warn!("Plugin provider '{}' registered more than once; keeping the last", id);
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<ProviderConstructor> {
        self.constructors.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    /// Registered identifiers, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.constructors.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
