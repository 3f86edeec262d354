//! Capability table output

use crate::plugin::api::ModuleLoadError;
use crate::registry::api::ServiceRegistry;
use prettytable::{format, Cell, Row, Table};

/// One row per capability: name, provider count, provider types
pub fn capability_table(registry: &ServiceRegistry, use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    let title_style = if use_color { "bFc" } else { "b" };
    table.set_titles(Row::new(vec![
        Cell::new("Capability").style_spec(title_style),
        Cell::new("Providers").style_spec(title_style),
        Cell::new("Types").style_spec(title_style),
    ]));

    for name in registry.service_names() {
        let providers = registry.resolve_all(&name);
        let mut types: Vec<&str> = providers.iter().map(|p| p.type_name()).collect();
        types.dedup();

        let name_cell = if use_color {
            Cell::new(&name).style_spec("Fb")
        } else {
            Cell::new(&name)
        };
        table.add_row(Row::new(vec![
            name_cell,
            Cell::new(&providers.len().to_string()).style_spec("r"),
            Cell::new(&types.join(", ")),
        ]));
    }

    table
}

/// Print the registered capabilities and any skipped plugin modules
pub fn display_registry(registry: &ServiceRegistry, skipped: &[ModuleLoadError], use_color: bool) {
    if registry.is_empty() {
        println!("No services registered.");
    } else {
        print!("{}", capability_table(registry, use_color));
    }

    if !skipped.is_empty() {
        println!();
        println!("Skipped {} plugin module(s):", skipped.len());
        for error in skipped {
            println!("  {}", error);
        }
    }
}
