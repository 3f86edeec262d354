//! Public API for bootstrapping the container
//!
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::lifecycle::bus::{LifecycleBus, Listener};
pub use crate::lifecycle::error::{BootstrapError, BootstrapResult};
pub use crate::lifecycle::events::{EventName, LifecycleEvent};
pub use crate::lifecycle::framework::{BootstrapState, Framework};
pub use crate::lifecycle::options::{BootstrapOptions, DEFAULT_PLUGIN_FOLDER};
