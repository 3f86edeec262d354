//! Service Registry
//!
//! Append-only list of (capability name, provider) pairs. A provider is
//! registered once per capability it provides; lookups match names exactly
//! and return registrations in insertion order.

use crate::core::sync::{recover_read, recover_write};
use crate::registry::capability::CapabilitySet;
use crate::registry::provider::{downcast_provider, ServiceProvider};
use crate::services::api::{
    FileSystemCapability, LogCapability, ABSTRACT_LOG_SERVICE, FILE_SYSTEM_SERVICE,
};
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

/// One entry in the registry
#[derive(Clone)]
pub struct ServiceRegistration {
    pub capability_name: String,
    pub provider: Arc<dyn ServiceProvider>,
}

impl std::fmt::Debug for ServiceRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistration")
            .field("capability_name", &self.capability_name)
            .field("provider", &self.provider.type_name())
            .finish()
    }
}

/// Registry of service providers keyed by capability name
///
/// Shared as `Arc<ServiceRegistry>`; all methods take `&self`. Concurrent
/// registrations interleave but never lose entries.
pub struct ServiceRegistry {
    services: RwLock<Vec<ServiceRegistration>>,
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.service_names())
            .field("registrations", &self.len())
            .finish()
    }
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            services: RwLock::new(Vec::new()),
        }
    }

    /// Register a provider under every capability it provides
    ///
    /// Registering the same instance twice doubles its entries. A provider
    /// whose ancestry holds only framework base names provides nothing: it is
    /// not registered and a warning is logged.
    pub fn register(&self, provider: Arc<dyn ServiceProvider>) -> CapabilitySet {
        let capabilities = provider.provides();

        if capabilities.is_empty() {
            log::warn!(
                "Provider {} declares no capabilities beyond the framework base; nothing registered",
                provider.type_name()
            );
            return capabilities;
        }

        let mut services = recover_write(self.services.write(), "ServiceRegistry::register");
        for name in &capabilities {
            services.push(ServiceRegistration {
                capability_name: name.clone(),
                provider: Arc::clone(&provider),
            });
        }
        drop(services);

        log::debug!(
            "Registered {} as {:?}",
            provider.type_name(),
            capabilities
        );
        capabilities
    }

    /// Register a concrete provider and hand back a typed handle to it
    pub fn register_provider<P: ServiceProvider>(&self, provider: P) -> Arc<P> {
        let provider = Arc::new(provider);
        self.register(Arc::clone(&provider) as Arc<dyn ServiceProvider>);
        provider
    }

    /// First provider registered under `capability_name`
    pub fn resolve(&self, capability_name: &str) -> Option<Arc<dyn ServiceProvider>> {
        recover_read(self.services.read(), "ServiceRegistry::resolve")
            .iter()
            .find(|registration| registration.capability_name == capability_name)
            .map(|registration| Arc::clone(&registration.provider))
    }

    /// Every provider registered under `capability_name`, in registration order
    pub fn resolve_all(&self, capability_name: &str) -> Vec<Arc<dyn ServiceProvider>> {
        recover_read(self.services.read(), "ServiceRegistry::resolve_all")
            .iter()
            .filter(|registration| registration.capability_name == capability_name)
            .map(|registration| Arc::clone(&registration.provider))
            .collect()
    }

    /// First provider under `capability_name`, downcast to its concrete type
    ///
    /// Returns `None` when nothing is registered under the name or when the
    /// first registrant is not a `T`.
    pub fn resolve_as<T: ServiceProvider>(&self, capability_name: &str) -> Option<Arc<T>> {
        self.resolve(capability_name).and_then(downcast_provider::<T>)
    }

    /// The log capability, resolved through its abstract name
    pub fn resolve_logger(&self) -> Option<Arc<dyn LogCapability>> {
        self.resolve(ABSTRACT_LOG_SERVICE)
            .and_then(|provider| provider.as_logger())
    }

    /// The file system capability
    pub fn resolve_file_system(&self) -> Option<Arc<dyn FileSystemCapability>> {
        self.resolve(FILE_SYSTEM_SERVICE)
            .and_then(|provider| provider.as_file_system())
    }

    /// Distinct capability names currently registered
    pub fn service_names(&self) -> BTreeSet<String> {
        recover_read(self.services.read(), "ServiceRegistry::service_names")
            .iter()
            .map(|registration| registration.capability_name.clone())
            .collect()
    }

    /// Snapshot of all registrations in insertion order
    pub fn registrations(&self) -> Vec<ServiceRegistration> {
        recover_read(self.services.read(), "ServiceRegistry::registrations").clone()
    }

    /// Number of registrations (not distinct providers)
    pub fn len(&self) -> usize {
        recover_read(self.services.read(), "ServiceRegistry::len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
