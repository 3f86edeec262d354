//! Lifecycle event bus
//!
//! Listeners are plain callbacks run synchronously, in subscription order,
//! on the thread that emits.

use crate::lifecycle::events::{EventName, LifecycleEvent};
use std::collections::HashMap;

pub type Listener = Box<dyn Fn(&LifecycleEvent<'_>) + Send + Sync>;

#[derive(Default)]
pub struct LifecycleBus {
    listeners: HashMap<EventName, Vec<Listener>>,
}

impl std::fmt::Debug for LifecycleBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<String, usize> = self
            .listeners
            .iter()
            .map(|(name, listeners)| (name.to_string(), listeners.len()))
            .collect();
        f.debug_struct("LifecycleBus")
            .field("listeners", &counts)
            .finish()
    }
}

impl LifecycleBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to every future emission of `name`
    pub fn on<F>(&mut self, name: EventName, listener: F) -> &mut Self
    where
        F: Fn(&LifecycleEvent<'_>) + Send + Sync + 'static,
    {
        self.listeners.entry(name).or_default().push(Box::new(listener));
        self
    }

    /// Deliver `event` to its listeners, returning how many were called
    pub fn emit(&self, event: &LifecycleEvent<'_>) -> usize {
        let name = event.name();
        let listeners = match self.listeners.get(&name) {
            Some(listeners) => listeners,
            None => {
                log::trace!("No listeners for {}", name);
                return 0;
            }
        };

        log::trace!("Emitting {} to {} listener(s)", name, listeners.len());
        for listener in listeners {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self, name: EventName) -> usize {
        self.listeners.get(&name).map_or(0, Vec::len)
    }
}
