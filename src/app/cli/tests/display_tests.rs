use crate::app::cli::display::capability_table;
use crate::registry::api::ServiceRegistry;
use crate::services::api::{FileSystemService, LogService};

#[test]
fn test_one_row_per_capability() {
    let registry = ServiceRegistry::new();
    registry.register_provider(LogService::new());
    registry.register_provider(FileSystemService::new());

    let table = capability_table(&registry, false);
    assert_eq!(table.len(), 3);

    let rendered = table.to_string();
    assert!(rendered.contains("Capability"));
    assert!(rendered.contains("AbstractLogService"));
    assert!(rendered.contains("FileSystemService"));
    assert!(rendered.contains("LogService"));
}

#[test]
fn test_provider_counts() {
    let registry = ServiceRegistry::new();
    registry.register_provider(LogService::new());
    registry.register_provider(LogService::with_source("audit"));

    let table = capability_table(&registry, false);
    assert_eq!(table.len(), 2);
    let row = table.get_row(0).unwrap();
    assert_eq!(row.get_cell(0).unwrap().get_content(), "AbstractLogService");
    assert_eq!(row.get_cell(1).unwrap().get_content(), "2");
}

#[test]
fn test_empty_registry_has_no_rows() {
    let table = capability_table(&ServiceRegistry::new(), true);
    assert!(table.is_empty());
}
