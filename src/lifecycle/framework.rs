//! Bootstrap Sequencer
//!
//! Drives a [`Framework`] through `Idle → BeforeLoad → Loading` and then to
//! either `AfterLoad` or `LoadError`. Plugin folders are scanned
//! concurrently; every module found in a folder is loaded as its own task and
//! all of them are joined before the folder counts as done. A module that
//! fails is reported and skipped, a folder that cannot be scanned fails the
//! whole bootstrap.

use crate::lifecycle::bus::LifecycleBus;
use crate::lifecycle::error::{BootstrapError, BootstrapResult};
use crate::lifecycle::events::{EventName, LifecycleEvent};
use crate::lifecycle::options::BootstrapOptions;
use crate::plugin::api::{
    load_module, DiscoveryError, LoadedModule, ModuleLoadError, PluginCatalog, PluginDiscovery,
};
use crate::plugin::loader::panic_message;
use crate::registry::api::ServiceRegistry;
use crate::services::api::{
    FileSystemCapability, FileSystemService, LogCapability, LogService, FILE_SYSTEM_SERVICE,
};
use futures::future::try_join_all;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;
use strum_macros::Display;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "camelCase")]
pub enum BootstrapState {
    Idle,
    BeforeLoad,
    Loading,
    AfterLoad,
    LoadError,
}

/// The dependency-injection container and its one-shot bootstrap
pub struct Framework {
    registry: Arc<ServiceRegistry>,
    bus: LifecycleBus,
    catalog: Arc<PluginCatalog>,
    discovery: PluginDiscovery,
    state: BootstrapState,
    skipped: Vec<ModuleLoadError>,
}

impl std::fmt::Debug for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framework")
            .field("state", &self.state)
            .field("registry", &self.registry)
            .field("bus", &self.bus)
            .field("catalog", &self.catalog)
            .field("skipped", &self.skipped.len())
            .finish()
    }
}

impl Default for Framework {
    fn default() -> Self {
        Self::new()
    }
}

impl Framework {
    /// Framework using every `provider_plugin!` registration in the binary
    pub fn new() -> Self {
        Self::with_catalog(PluginCatalog::from_inventory())
    }

    pub fn with_catalog(catalog: PluginCatalog) -> Self {
        Self {
            registry: Arc::new(ServiceRegistry::new()),
            bus: LifecycleBus::new(),
            catalog: Arc::new(catalog),
            discovery: PluginDiscovery::new(),
            state: BootstrapState::Idle,
            skipped: Vec::new(),
        }
    }

    /// Replace the manifest discovery rules (e.g. a different extension)
    pub fn with_discovery(mut self, discovery: PluginDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Subscribe to a lifecycle event
    pub fn on<F>(&mut self, name: EventName, listener: F) -> &mut Self
    where
        F: Fn(&LifecycleEvent<'_>) + Send + Sync + 'static,
    {
        self.bus.on(name, listener);
        self
    }

    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// Plugin modules that failed to load during the last bootstrap
    pub fn skipped_modules(&self) -> &[ModuleLoadError] {
        &self.skipped
    }

    /// Run the bootstrap; may be called once
    pub async fn start(&mut self, options: BootstrapOptions) -> BootstrapResult<Arc<ServiceRegistry>> {
        if self.state != BootstrapState::Idle {
            return Err(BootstrapError::AlreadyStarted {
                state: self.state.to_string(),
            });
        }

        self.state = BootstrapState::BeforeLoad;
        self.bus.emit(&LifecycleEvent::BeforeLoad);
        self.register_builtins(options.debug_on);

        self.state = BootstrapState::Loading;
        match self.load_plugins(&options).await {
            Ok(skipped) => {
                self.skipped = skipped;
                self.state = BootstrapState::AfterLoad;
                let names: Vec<String> = self.registry.service_names().into_iter().collect();
                report(
                    &self.registry,
                    &format!("Registered services: {}", names.join(", ")),
                );
                self.bus.emit(&LifecycleEvent::AfterLoad(&self.registry));
                Ok(Arc::clone(&self.registry))
            }
            Err(error) => {
                self.state = BootstrapState::LoadError;
                report(
                    &self.registry,
                    &format!("Failed to start DI framework: {}", error),
                );
                self.bus.emit(&LifecycleEvent::LoadError(&error));
                Err(error)
            }
        }
    }

    fn register_builtins(&self, debug_on: bool) {
        let logger = self.registry.register_provider(LogService::new());
        logger.set_enabled(debug_on);
        self.registry.register_provider(FileSystemService::new());
        log::debug!("Built-in services registered (debug output: {})", debug_on);
    }

    async fn load_plugins(&self, options: &BootstrapOptions) -> BootstrapResult<Vec<ModuleLoadError>> {
        let file_system = self
            .registry
            .resolve_file_system()
            .ok_or(BootstrapError::MissingBuiltin {
                capability: FILE_SYSTEM_SERVICE,
            })?;

        let folders = options.plugin_folders();
        let scans = folders.iter().map(|folder| {
            self.scan_folder(folder, Arc::clone(&file_system), options.data.clone())
        });
        let per_folder = try_join_all(scans).await?;

        Ok(per_folder.into_iter().flatten().collect())
    }

    /// Load every module in one folder, returning the ones that failed
    async fn scan_folder(
        &self,
        folder: &Path,
        file_system: Arc<dyn FileSystemCapability>,
        data: Option<toml::Value>,
    ) -> Result<Vec<ModuleLoadError>, DiscoveryError> {
        let manifests = self.discovery.discover(folder, file_system.as_ref()).await?;

        let mut tasks = JoinSet::new();
        for path in manifests {
            report(
                &self.registry,
                &format!("importing module {}", path.display()),
            );
            let registry = Arc::clone(&self.registry);
            let catalog = Arc::clone(&self.catalog);
            let file_system = Arc::clone(&file_system);
            let data = data.clone();

            tasks.spawn(async move {
                let load = load_module(&path, registry, &catalog, file_system.as_ref(), data);
                let outcome = match AssertUnwindSafe(load).catch_unwind().await {
                    Ok(result) => result,
                    Err(payload) => Err(ModuleLoadError::Panicked {
                        path: path.clone(),
                        message: panic_message(payload.as_ref()),
                    }),
                };
                (path, outcome)
            });
        }

        let mut failures = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((path, Ok(loaded))) => self.module_loaded(&path, &loaded),
                Ok((_, Err(error))) => {
                    report(&self.registry, &error.to_string());
                    log::warn!("Skipping plugin module: {}", error);
                    failures.push(error);
                }
                Err(join_error) => {
                    log::error!(
                        "Plugin task in {} did not complete: {}",
                        folder.display(),
                        join_error
                    );
                }
            }
        }

        log::debug!(
            "Finished plugin folder {} ({} failed)",
            folder.display(),
            failures.len()
        );
        Ok(failures)
    }

    fn module_loaded(&self, path: &Path, loaded: &LoadedModule) {
        log::debug!(
            "Loaded '{}' from {} providing [{}]",
            loaded.provider,
            path.display(),
            loaded.capabilities.join(", ")
        );
    }
}

/// Send a message through the registered log capability, if any
fn report(registry: &ServiceRegistry, message: &str) {
    match registry.resolve_logger() {
        Some(logger) => logger.log(message),
        None => log::debug!("{}", message),
    }
}
