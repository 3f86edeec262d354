//! Plugin manifest files
//!
//! A plugin module on disk is a small TOML file naming the catalog provider
//! to construct and the settings to construct it with:
//!
//! ```toml
//! provider = "settings-file-service"
//!
//! [settings]
//! path = "config/settings.json"
//! ```

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginManifest {
    /// Catalog identifier of the provider constructor
    pub provider: String,

    /// Provider-specific settings, passed through untouched
    #[serde(default)]
    pub settings: toml::Table,
}

impl PluginManifest {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
