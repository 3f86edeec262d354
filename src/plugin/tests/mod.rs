//! Test modules for the plugin system

mod error;
mod utils;
