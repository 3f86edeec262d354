//! Built-in log service

use crate::registry::api::{ServiceProvider, SERVICE_PROVIDER};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const LOG_SERVICE: &str = "LogService";
pub const ABSTRACT_LOG_SERVICE: &str = "AbstractLogService";

/// Capability contract for progress and diagnostic output
///
/// A disabled logger must drop every message without side effects.
pub trait LogCapability: Send + Sync {
    fn log(&self, message: &str);

    fn set_enabled(&self, enabled: bool);

    fn is_enabled(&self) -> bool;
}

/// Log service backed by the `log` facade
#[derive(Debug)]
pub struct LogService {
    enabled: AtomicBool,
    source: String,
}

impl LogService {
    /// Enabled logger labelled with the crate name
    pub fn new() -> Self {
        Self::with_source(env!("CARGO_PKG_NAME"))
    }

    /// Enabled logger whose lines are prefixed with `source`
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for LogService {
    fn default() -> Self {
        Self::new()
    }
}

impl LogCapability for LogService {
    fn log(&self, message: &str) {
        if self.is_enabled() {
            log::info!("{} | {}", self.source, message);
        }
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl ServiceProvider for LogService {
    fn ancestry(&self) -> &'static [&'static str] {
        &[LOG_SERVICE, ABSTRACT_LOG_SERVICE, SERVICE_PROVIDER]
    }

    fn as_logger(self: Arc<Self>) -> Option<Arc<dyn LogCapability>> {
        Some(self)
    }
}
