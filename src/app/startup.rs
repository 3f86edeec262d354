//! Binary entry point logic

use crate::app::cli::args::Args;
use crate::app::cli::config::load_config_file;
use crate::app::cli::display::display_registry;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{init_logging, set_log_level};
use crate::lifecycle::api::{EventName, Framework, LifecycleEvent};
use clap::Parser;
use std::process::ExitCode;

/// Parse arguments, set up logging and run the bootstrap
pub fn startup() -> ExitCode {
    let args = Args::parse();
    let use_color = args.use_color();

    let log_file = args.log_file.as_ref().map(|path| path.to_string_lossy().to_string());
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error initializing logging: {}", e);
        return ExitCode::FAILURE;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("FATAL: could not start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(args, use_color))
}

async fn run(args: Args, use_color: bool) -> ExitCode {
    log::info!("depinject {} starting", env!("CARGO_PKG_VERSION"));

    let config = match load_config_file(args.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            log::error!("FATAL: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // The command line level wins over the configured one
    if let (None, Some(level)) = (&args.log_level, &config.log.level) {
        if let Err(e) = set_log_level(level) {
            log::warn!("Ignoring configured log level '{}': {}", level, e);
        }
    }

    let mut options = config.bootstrap;
    if !args.plugins.is_empty() {
        options.load_plugins_from = args.plugins.clone();
    }
    if args.debug {
        options.debug_on = true;
    }
    log::debug!("Bootstrap options: {:?}", options);

    let mut framework = Framework::new();
    framework
        .on(EventName::BeforeLoad, |_| log::debug!("Bootstrap starting"))
        .on(EventName::AfterLoad, |event| {
            if let LifecycleEvent::AfterLoad(registry) = event {
                log::info!("Bootstrap complete: {} registrations", registry.len());
            }
        });

    match framework.start(options).await {
        Ok(registry) => {
            display_registry(&registry, framework.skipped_modules(), use_color);
            ExitCode::SUCCESS
        }
        Err(error) => {
            log_error_with_context(&error, "Failed to start DI framework");
            ExitCode::FAILURE
        }
    }
}
