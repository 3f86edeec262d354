//! Common test utilities and helpers
//!
//! Plugin folder fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary plugin folder that manifests can be dropped into
pub struct PluginFolder {
    dir: TempDir,
}

impl PluginFolder {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp plugin folder"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a manifest naming `provider` with no settings
    pub fn manifest(&self, name: &str, provider: &str) -> PathBuf {
        self.raw(name, &format!("provider = \"{}\"\n", provider))
    }

    /// Write a manifest with a `[settings]` table body
    pub fn manifest_with_settings(&self, name: &str, provider: &str, settings: &str) -> PathBuf {
        self.raw(
            name,
            &format!("provider = \"{}\"\n\n[settings]\n{}\n", provider, settings),
        )
    }

    /// Write arbitrary contents, creating intermediate folders
    pub fn raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create manifest folder");
        }
        std::fs::write(&path, contents).expect("write manifest");
        path
    }

    /// A path inside the folder that does not exist
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// TOML string literal for a path, safe on every platform
pub fn toml_path(path: &Path) -> String {
    format!("{:?}", path.to_string_lossy())
}
