//! Built-in file system service

use crate::registry::api::{ServiceProvider, SERVICE_PROVIDER};
use crate::services::error::{FileSystemError, FileSystemResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const FILE_SYSTEM_SERVICE: &str = "FileSystemService";

/// Capability contract for file access
#[async_trait]
pub trait FileSystemCapability: Send + Sync {
    /// All files under `folder` (recursively) ending in `.<extension>`
    async fn list(&self, folder: &Path, extension: &str) -> FileSystemResult<Vec<PathBuf>>;

    async fn read(&self, path: &Path) -> FileSystemResult<Vec<u8>>;

    /// Write `data` to `path`, creating the parent folder if needed
    async fn write(&self, path: &Path, data: &[u8]) -> FileSystemResult<()>;

    async fn exists(&self, path: &Path) -> bool;
}

/// File system service on top of tokio::fs and glob
#[derive(Debug, Default)]
pub struct FileSystemService;

impl FileSystemService {
    pub fn new() -> Self {
        Self
    }
}

fn listing_pattern(folder: &Path, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&folder.to_string_lossy()),
        extension
    )
}

/// Blocking glob walk, run off the async workers
fn walk_pattern(pattern: &str) -> FileSystemResult<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| FileSystemError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(glob_error) => {
                return Err(FileSystemError::Read {
                    path: glob_error.path().to_path_buf(),
                    source: glob_error.into_error(),
                })
            }
        }
    }
    Ok(files)
}

#[async_trait]
impl FileSystemCapability for FileSystemService {
    async fn list(&self, folder: &Path, extension: &str) -> FileSystemResult<Vec<PathBuf>> {
        let metadata = tokio::fs::metadata(folder)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => FileSystemError::NotFound {
                    path: folder.to_path_buf(),
                },
                _ => FileSystemError::Read {
                    path: folder.to_path_buf(),
                    source,
                },
            })?;
        if !metadata.is_dir() {
            return Err(FileSystemError::NotAFolder {
                path: folder.to_path_buf(),
            });
        }

        let pattern = listing_pattern(folder, extension);
        let files = tokio::task::spawn_blocking(move || walk_pattern(&pattern))
            .await
            .map_err(|source| FileSystemError::Interrupted {
                path: folder.to_path_buf(),
                source,
            })??;

        log::debug!("files listed under {}: {:?}", folder.display(), files);
        Ok(files)
    }

    async fn read(&self, path: &Path) -> FileSystemResult<Vec<u8>> {
        if !self.exists(path).await {
            return Err(FileSystemError::NotFound {
                path: path.to_path_buf(),
            });
        }
        tokio::fs::read(path)
            .await
            .map_err(|source| FileSystemError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn write(&self, path: &Path, data: &[u8]) -> FileSystemResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| FileSystemError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        tokio::fs::write(path, data)
            .await
            .map_err(|source| FileSystemError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

impl ServiceProvider for FileSystemService {
    fn ancestry(&self) -> &'static [&'static str] {
        &[FILE_SYSTEM_SERVICE, SERVICE_PROVIDER]
    }

    fn as_file_system(self: Arc<Self>) -> Option<Arc<dyn FileSystemCapability>> {
        Some(self)
    }
}
