//! The provider contract every registered service implements

use crate::registry::capability::{capabilities_of, CapabilitySet};
use crate::services::api::{FileSystemCapability, LogCapability};
use std::any::Any;
use std::sync::Arc;

/// Type-erasure helpers, implemented for every sized provider type
pub trait AsAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A service instance that can be placed in the registry
///
/// Providers are process-wide singletons shared through `Arc`. The registry
/// holds a reference but never tears a provider down.
pub trait ServiceProvider: AsAny {
    /// Type names from the concrete type upward, e.g.
    /// `["LogService", "AbstractLogService", "ServiceProvider"]`
    fn ancestry(&self) -> &'static [&'static str];

    /// Capability names this provider is registered under
    fn provides(&self) -> CapabilitySet {
        capabilities_of(self.ancestry())
    }

    /// Rust type name, for diagnostics only
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// View this provider as a log capability, if it is one
    fn as_logger(self: Arc<Self>) -> Option<Arc<dyn LogCapability>> {
        None
    }

    /// View this provider as a file system capability, if it is one
    fn as_file_system(self: Arc<Self>) -> Option<Arc<dyn FileSystemCapability>> {
        None
    }
}

/// Recover the concrete type of a registered provider
pub fn downcast_provider<T: ServiceProvider>(provider: Arc<dyn ServiceProvider>) -> Option<Arc<T>> {
    provider.into_any_arc().downcast::<T>().ok()
}

impl std::fmt::Debug for dyn ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("type", &self.type_name())
            .field("provides", &self.provides())
            .finish()
    }
}
