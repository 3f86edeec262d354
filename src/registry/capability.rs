//! Capability name derivation
//!
//! Every provider declares its ancestry: its own type name first, then each
//! abstract capability it implements, ending at the framework base. The names
//! a provider is registered under are the leading run of that list that is
//! not a framework base name.

/// Ordered capability names for one provider, most-derived first
pub type CapabilitySet = Vec<String>;

/// Base name every provider ancestry ends with
pub const SERVICE_PROVIDER: &str = "ServiceProvider";

/// Framework-level names that never become capabilities
pub const FRAMEWORK_BASE_NAMES: [&str; 4] = [SERVICE_PROVIDER, "EventEmitter", "Object", ""];

/// True for names that terminate the ancestry walk
pub fn is_framework_base(name: &str) -> bool {
    FRAMEWORK_BASE_NAMES.contains(&name)
}

/// Walk an ancestry chain and collect the capability names it grants
///
/// Stops at the end of the chain or at the first framework base name; names
/// after a base are never reached.
pub fn capabilities_of(ancestry: &[&str]) -> CapabilitySet {
    ancestry
        .iter()
        .take_while(|name| !is_framework_base(name))
        .map(|name| name.to_string())
        .collect()
}
