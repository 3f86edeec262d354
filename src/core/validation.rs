//! Validation utilities shared by configuration, discovery and file services

use thiserror::Error;

/// A value supplied by a caller or a config file was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl crate::core::error_handling::ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Normalise a file extension: strip one leading dot, keep its case
pub fn validate_extension(ext: &str) -> Result<String, ValidationError> {
    let cleaned = ext.strip_prefix('.').unwrap_or(ext);

    if cleaned.is_empty() {
        return Err(ValidationError::new("Extension cannot be empty"));
    }

    if cleaned.contains('/') || cleaned.contains('\\') {
        return Err(ValidationError::new(format!(
            "Extension '{}' cannot contain path separators",
            ext
        )));
    }

    if cleaned.contains('*') || cleaned.contains('?') || cleaned.contains('[') {
        return Err(ValidationError::new(format!(
            "Extension '{}' cannot contain glob characters",
            ext
        )));
    }

    Ok(cleaned.to_string())
}

/// JSON documents are only read from and written to `*.json` paths
pub fn validate_json_path(path: &std::path::Path) -> Result<(), ValidationError> {
    let is_json = path
        .to_str()
        .map(|p| p.ends_with("json"))
        .unwrap_or(false);
    if is_json {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "invalid file extension for {}: must use '.json'",
            path.display()
        )))
    }
}
