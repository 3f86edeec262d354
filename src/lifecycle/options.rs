//! Bootstrap options

use serde::Deserialize;
use std::path::PathBuf;

/// Folder scanned when no plugin folders are configured
pub const DEFAULT_PLUGIN_FOLDER: &str = "plugins";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BootstrapOptions {
    /// Folders scanned for plugin manifests
    pub load_plugins_from: Vec<PathBuf>,

    /// Enables output from the built-in log service
    pub debug_on: bool,

    /// Opaque value handed to every provider constructor
    pub data: Option<toml::Value>,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            load_plugins_from: Vec::new(),
            debug_on: true,
            data: None,
        }
    }
}

impl BootstrapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.load_plugins_from.push(folder.into());
        self
    }

    pub fn with_debug(mut self, debug_on: bool) -> Self {
        self.debug_on = debug_on;
        self
    }

    pub fn with_data(mut self, data: toml::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Folders to scan, falling back to [`DEFAULT_PLUGIN_FOLDER`]
    pub fn plugin_folders(&self) -> Vec<PathBuf> {
        if self.load_plugins_from.is_empty() {
            vec![PathBuf::from(DEFAULT_PLUGIN_FOLDER)]
        } else {
            self.load_plugins_from.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BootstrapOptions::default();
        assert!(options.debug_on);
        assert!(options.data.is_none());
        assert_eq!(options.plugin_folders(), vec![PathBuf::from("plugins")]);
    }

    #[test]
    fn test_configured_folders_replace_default() {
        let options = BootstrapOptions::new()
            .with_folder("a")
            .with_folder("b")
            .with_debug(false);
        assert_eq!(
            options.plugin_folders(),
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );
        assert!(!options.debug_on);
    }

    #[test]
    fn test_deserialize_partial_table() {
        let options: BootstrapOptions = toml::from_str(
            "load_plugins_from = [\"ext/plugins\"]\n[data]\nregion = \"eu\"\n",
        )
        .unwrap();
        assert_eq!(options.load_plugins_from, vec![PathBuf::from("ext/plugins")]);
        assert!(options.debug_on);
        assert_eq!(
            options.data.unwrap().get("region").and_then(|v| v.as_str()),
            Some("eu")
        );
    }
}
