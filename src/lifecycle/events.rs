//! Lifecycle event types

use crate::lifecycle::error::BootstrapError;
use crate::registry::api::ServiceRegistry;
use std::sync::Arc;
use strum_macros::{Display, EnumString};

/// Payload-less tag used to subscribe to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum EventName {
    BeforeLoad,
    AfterLoad,
    LoadError,
}

/// An event as delivered to listeners
///
/// Payloads are borrowed for the duration of the emit; listeners that need
/// the registry beyond that clone the `Arc`.
#[derive(Debug, Clone, Copy)]
pub enum LifecycleEvent<'a> {
    BeforeLoad,
    AfterLoad(&'a Arc<ServiceRegistry>),
    LoadError(&'a BootstrapError),
}

impl LifecycleEvent<'_> {
    pub fn name(&self) -> EventName {
        match self {
            LifecycleEvent::BeforeLoad => EventName::BeforeLoad,
            LifecycleEvent::AfterLoad(_) => EventName::AfterLoad,
            LifecycleEvent::LoadError(_) => EventName::LoadError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_event_names_render_camel_case() {
        assert_eq!(EventName::BeforeLoad.to_string(), "beforeLoad");
        assert_eq!(EventName::from_str("loadError").unwrap(), EventName::LoadError);
        assert!(EventName::from_str("unload").is_err());
    }

    #[test]
    fn test_event_name_matches_variant() {
        let registry = Arc::new(ServiceRegistry::new());
        assert_eq!(LifecycleEvent::BeforeLoad.name(), EventName::BeforeLoad);
        assert_eq!(LifecycleEvent::AfterLoad(&registry).name(), EventName::AfterLoad);
    }
}
