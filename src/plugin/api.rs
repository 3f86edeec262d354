//! Public API for the plugin system
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Catalog and registration macro support
pub use crate::plugin::catalog::{inventory, PluginCatalog, PluginEntry, ProviderConstructor};

// Construction context handed to providers
pub use crate::plugin::context::PluginContext;

// Discovery and loading
pub use crate::plugin::discovery::{
    PluginDiscovery, DEFAULT_PLUGIN_EXTENSION, RESERVED_NAME_FRAGMENTS,
};
pub use crate::plugin::loader::{load_module, LoadedModule};
pub use crate::plugin::manifest::PluginManifest;

// Error handling
pub use crate::plugin::error::{ConstructorError, DiscoveryError, ModuleLoadError, PluginResult};

// Built-in providers
pub use crate::plugin::builtin::settings::{
    SettingsFileService, DEFAULT_SETTINGS_FILE, SETTINGS_FILE_SERVICE, SETTINGS_PLUGIN_ID,
};
