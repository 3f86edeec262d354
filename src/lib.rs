pub mod app;
pub mod core;
pub mod lifecycle;
pub mod plugin;
pub mod registry;
pub mod services;
