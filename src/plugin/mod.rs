//! Plugin System Module
//!
//! Discovers plugin manifests in plugin folders and turns them into
//! registered providers through the compile-time plugin catalog.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod catalog;
pub(crate) mod context;
pub(crate) mod discovery;
pub(crate) mod error;
pub(crate) mod loader;
pub(crate) mod manifest;

// Public API module - the only public interface for the plugin system
pub mod api;

#[cfg(test)]
mod tests;
