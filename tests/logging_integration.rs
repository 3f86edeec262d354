//! Logger initialisation tests
//!
//! The logger is process-wide, so these run serially in their own binary.

use depinject::core::logging::{init_logging, set_log_level, LogFormat};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_set_level_before_init_fails_then_file_logging_works() {
    assert!(set_log_level("debug").is_err());

    let dir = TempDir::new().unwrap();
    let log_file = dir.path().join("depinject.log");
    init_logging(
        Some("info"),
        LogFormat::Json,
        Some(&log_file.to_string_lossy()),
        false,
    )
    .unwrap();

    log::info!("written to file");
    assert!(set_log_level("warn").is_ok());
}
