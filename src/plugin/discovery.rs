//! Plugin Discovery
//!
//! Finds plugin manifest files beneath a folder. Files whose name contains
//! one of the reserved fragments belong to the framework itself and are
//! never treated as plugins.

use crate::core::validation::{validate_extension, ValidationError};
use crate::plugin::error::DiscoveryError;
use crate::services::api::FileSystemCapability;
use std::path::{Path, PathBuf};

/// Manifest extension searched for when none is configured
pub const DEFAULT_PLUGIN_EXTENSION: &str = "toml";

/// File name fragments that mark framework internals
pub const RESERVED_NAME_FRAGMENTS: [&str; 2] = ["service-provider", "file-system"];

/// Plugin discovery for one manifest extension
#[derive(Debug, Clone)]
pub struct PluginDiscovery {
    extension: String,
    excluded_fragments: Vec<String>,
}

impl PluginDiscovery {
    /// Discovery for `*.toml` manifests with the reserved exclusions
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_PLUGIN_EXTENSION.to_string(),
            excluded_fragments: RESERVED_NAME_FRAGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Discovery for a different manifest extension (`json`, `.plugin`, ...)
    pub fn with_extension(extension: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            extension: validate_extension(extension)?,
            ..Self::new()
        })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// True unless the file name contains a reserved fragment
    pub fn is_candidate(&self, path: &Path) -> bool {
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };
        !self
            .excluded_fragments
            .iter()
            .any(|fragment| file_name.contains(fragment.as_str()))
    }

    /// List candidate plugin manifests under `folder`, recursively
    pub async fn discover(
        &self,
        folder: &Path,
        file_system: &dyn FileSystemCapability,
    ) -> Result<Vec<PathBuf>, DiscoveryError> {
        log::debug!(
            "Discovering *.{} plugins under {}",
            self.extension,
            folder.display()
        );

        let listed = file_system
            .list(folder, &self.extension)
            .await
            .map_err(|source| DiscoveryError {
                folder: folder.to_path_buf(),
                source,
            })?;

        let before_exclusions = listed.len();
        let candidates: Vec<PathBuf> = listed
            .into_iter()
            .filter(|path| self.is_candidate(path))
            .collect();

        log::debug!(
            "Found {} plugin candidates under {} ({} listed)",
            candidates.len(),
            folder.display(),
            before_exclusions
        );
        Ok(candidates)
    }
}

impl Default for PluginDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
