//! Shared fixtures for plugin tests

use crate::plugin::context::PluginContext;
use crate::plugin::error::ConstructorError;
use crate::registry::api::{ServiceProvider, SERVICE_PROVIDER};
use crate::services::api::{FileSystemCapability, FileSystemError, FileSystemResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) struct GreetingService {
    pub greeting: String,
}

impl ServiceProvider for GreetingService {
    fn ancestry(&self) -> &'static [&'static str] {
        &["GreetingService", "AbstractGreetingService", SERVICE_PROVIDER]
    }
}

pub(crate) fn make_greeting(
    context: &PluginContext,
) -> Result<Arc<dyn ServiceProvider>, ConstructorError> {
    let greeting = context.setting_str("greeting").unwrap_or("hello").to_string();
    Ok(Arc::new(GreetingService { greeting }))
}

pub(crate) fn make_broken(_: &PluginContext) -> Result<Arc<dyn ServiceProvider>, ConstructorError> {
    Err("missing dependency".into())
}

/// Write a plugin manifest naming `provider` into `folder`
pub(crate) fn write_manifest(folder: &Path, file_name: &str, provider: &str) -> PathBuf {
    let path = folder.join(file_name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, format!("provider = \"{}\"\n", provider)).unwrap();
    path
}

/// File system whose listing always fails with a permission error
pub(crate) struct DeniedFileSystem;

#[async_trait]
impl FileSystemCapability for DeniedFileSystem {
    async fn list(&self, folder: &Path, _extension: &str) -> FileSystemResult<Vec<PathBuf>> {
        Err(FileSystemError::Read {
            path: folder.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    async fn read(&self, path: &Path) -> FileSystemResult<Vec<u8>> {
        Err(FileSystemError::NotFound {
            path: path.to_path_buf(),
        })
    }

    async fn write(&self, path: &Path, _data: &[u8]) -> FileSystemResult<()> {
        Err(FileSystemError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    async fn exists(&self, _path: &Path) -> bool {
        false
    }
}
