//! Built-in services registered before any plugin is loaded

// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod file_system;
pub(crate) mod json_file;
pub(crate) mod logger;

// Public API module - the only public interface for the built-in services
pub mod api;
