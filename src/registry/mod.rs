//! Service registry and capability resolution

// Internal modules - all access should go through api module
pub(crate) mod capability;
pub(crate) mod provider;
pub(crate) mod service_registry;

// Public API module - the only public interface for the registry
pub mod api;
