//! Error types for the built-in services

use crate::core::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

pub type FileSystemResult<T> = Result<T, FileSystemError>;
pub type JsonFileResult<T> = Result<T, JsonFileError>;

#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("file or folder {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a folder", path.display())]
    NotAFolder { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid listing pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("listing of {} did not complete: {source}", path.display())]
    Interrupted {
        path: PathBuf,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl FileSystemError {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FileSystemError::NotFound { path }
            | FileSystemError::NotAFolder { path }
            | FileSystemError::Read { path, .. }
            | FileSystemError::Write { path, .. }
            | FileSystemError::Interrupted { path, .. } => Some(path),
            FileSystemError::Pattern { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("file service not available, can not access {}", path.display())]
    FileServiceUnavailable { path: PathBuf },

    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
