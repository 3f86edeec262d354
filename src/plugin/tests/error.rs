//! Tests for plugin error reporting

use crate::plugin::error::{DiscoveryError, ModuleLoadError};
use crate::services::api::FileSystemError;
use std::path::{Path, PathBuf};

#[test]
fn test_discovery_error_names_folder() {
    let error = DiscoveryError {
        folder: PathBuf::from("/opt/plugins"),
        source: FileSystemError::NotFound {
            path: PathBuf::from("/opt/plugins"),
        },
    };

    assert_eq!(
        error.to_string(),
        "could not scan plugin folder /opt/plugins: file or folder /opt/plugins does not exist"
    );
}

#[test]
fn test_unknown_provider_message() {
    let error = ModuleLoadError::UnknownProvider {
        path: PathBuf::from("plugins/mail.toml"),
        provider: "mail".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "plugin manifest plugins/mail.toml names unknown provider 'mail'"
    );
    assert_eq!(error.path(), Path::new("plugins/mail.toml"));
}

#[test]
fn test_construction_error_keeps_source() {
    let error = ModuleLoadError::Construction {
        path: PathBuf::from("plugins/mail.toml"),
        provider: "mail".to_string(),
        source: "smtp host missing".into(),
    };

    assert!(error.to_string().ends_with("smtp host missing"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_panicked_error_message() {
    let error = ModuleLoadError::Panicked {
        path: PathBuf::from("plugins/bad.toml"),
        message: "boom".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "plugin module plugins/bad.toml panicked while loading: boom"
    );
}
