//! Tests for the lifecycle event bus

use crate::lifecycle::bus::LifecycleBus;
use crate::lifecycle::events::{EventName, LifecycleEvent};
use crate::registry::api::ServiceRegistry;
use std::sync::{Arc, Mutex};

#[test]
fn test_listeners_run_in_subscription_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut bus = LifecycleBus::new();

    for label in ["first", "second", "third"] {
        let calls = Arc::clone(&calls);
        bus.on(EventName::BeforeLoad, move |_| {
            calls.lock().unwrap().push(label);
        });
    }

    assert_eq!(bus.emit(&LifecycleEvent::BeforeLoad), 3);
    assert_eq!(*calls.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn test_emit_only_reaches_matching_listeners() {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let mut bus = LifecycleBus::new();
    {
        let hits = Arc::clone(&hits);
        bus.on(EventName::AfterLoad, move |event| {
            hits.lock().unwrap().push(event.name());
        });
    }

    assert_eq!(bus.emit(&LifecycleEvent::BeforeLoad), 0);
    let registry = Arc::new(ServiceRegistry::new());
    assert_eq!(bus.emit(&LifecycleEvent::AfterLoad(&registry)), 1);
    assert_eq!(*hits.lock().unwrap(), vec![EventName::AfterLoad]);
}

#[test]
fn test_listener_count_and_chaining() {
    let mut bus = LifecycleBus::new();
    bus.on(EventName::LoadError, |_| {})
        .on(EventName::LoadError, |_| {})
        .on(EventName::AfterLoad, |_| {});

    assert_eq!(bus.listener_count(EventName::LoadError), 2);
    assert_eq!(bus.listener_count(EventName::AfterLoad), 1);
    assert_eq!(bus.listener_count(EventName::BeforeLoad), 0);
}

#[test]
fn test_after_load_payload_is_the_registry() {
    let registry = Arc::new(ServiceRegistry::new());
    let seen = Arc::new(Mutex::new(None));
    let mut bus = LifecycleBus::new();
    {
        let seen = Arc::clone(&seen);
        bus.on(EventName::AfterLoad, move |event| {
            if let LifecycleEvent::AfterLoad(registry) = event {
                *seen.lock().unwrap() = Some(Arc::clone(registry));
            }
        });
    }

    bus.emit(&LifecycleEvent::AfterLoad(&registry));
    let seen = seen.lock().unwrap().take().unwrap();
    assert!(Arc::ptr_eq(&seen, &registry));
}
