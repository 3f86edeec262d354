//! Bootstrap errors

use crate::core::error_handling::ContextualError;
use crate::plugin::api::DiscoveryError;
use thiserror::Error;

pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("bootstrap already started (state: {state})")]
    AlreadyStarted { state: String },

    #[error("{message}")]
    Discovery {
        message: String,
        #[source]
        source: DiscoveryError,
    },

    #[error("built-in capability '{capability}' is not registered")]
    MissingBuiltin { capability: &'static str },
}

impl From<DiscoveryError> for BootstrapError {
    fn from(source: DiscoveryError) -> Self {
        BootstrapError::Discovery {
            message: source.to_string(),
            source,
        }
    }
}

impl ContextualError for BootstrapError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, BootstrapError::Discovery { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            BootstrapError::Discovery { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::FileSystemError;
    use std::path::PathBuf;

    #[test]
    fn test_discovery_error_is_user_actionable() {
        let error = BootstrapError::from(DiscoveryError {
            folder: PathBuf::from("plugins"),
            source: FileSystemError::NotFound {
                path: PathBuf::from("plugins"),
            },
        });

        assert!(error.is_user_actionable());
        assert_eq!(
            error.user_message(),
            Some("could not scan plugin folder plugins: file or folder plugins does not exist")
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_already_started_is_system_error() {
        let error = BootstrapError::AlreadyStarted {
            state: "afterLoad".to_string(),
        };
        assert!(!error.is_user_actionable());
        assert!(error.user_message().is_none());
        assert_eq!(error.to_string(), "bootstrap already started (state: afterLoad)");
    }
}
