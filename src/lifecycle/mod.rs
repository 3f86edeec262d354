//! Bootstrap sequencing and lifecycle events

// Internal modules - all access should go through api module
pub(crate) mod bus;
pub(crate) mod error;
pub(crate) mod events;
pub(crate) mod framework;
pub(crate) mod options;

// Public API module - the only public interface for bootstrapping
pub mod api;

#[cfg(test)]
mod tests;
