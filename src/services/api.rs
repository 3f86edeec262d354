//! Public API for the built-in services and the capability contracts the
//! core consumes

pub use crate::services::error::{
    FileSystemError, FileSystemResult, JsonFileError, JsonFileResult,
};
pub use crate::services::file_system::{
    FileSystemCapability, FileSystemService, FILE_SYSTEM_SERVICE,
};
pub use crate::services::json_file::{JsonFileStore, JSON_FILE_SERVICE};
pub use crate::services::logger::{LogCapability, LogService, ABSTRACT_LOG_SERVICE, LOG_SERVICE};
