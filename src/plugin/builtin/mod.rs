//! Built-in plugin providers
//!
//! Compiled into the catalog through `provider_plugin!`; a plugin folder only
//! needs a manifest naming them to have them instantiated.

pub mod settings;
