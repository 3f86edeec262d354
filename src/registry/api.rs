//! Public API for the service registry
//!
//! External modules should import from here rather than directly from the
//! internal modules.

pub use crate::registry::capability::{
    capabilities_of, is_framework_base, CapabilitySet, FRAMEWORK_BASE_NAMES, SERVICE_PROVIDER,
};
pub use crate::registry::provider::{downcast_provider, AsAny, ServiceProvider};
pub use crate::registry::service_registry::{ServiceRegistration, ServiceRegistry};
