//! Command-line arguments

use crate::core::logging::LogFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "depinject")]
#[command(about = "Bootstrap a service registry from plugin folders")]
#[command(version, long_version = crate::core::version::long_version())]
#[command(after_help = " * can be specified multiple times or as a comma-separated list")]
pub struct Args {
    /// Plugin folders to scan*
    #[arg(short = 'p', long = "plugins", value_name = "DIRS", action = ArgAction::Append, value_delimiter = ',')]
    pub plugins: Vec<PathBuf>,

    /// Enable output from the built-in log service
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Selected log format, `text` when unset
    pub fn log_format(&self) -> LogFormat {
        self.log_format
            .as_deref()
            .and_then(|format| LogFormat::from_str(format).ok())
            .unwrap_or_default()
    }

    /// Color is used unless disabled or stdout is not a terminal
    pub fn use_color(&self) -> bool {
        use std::io::IsTerminal;
        !self.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    }
}
