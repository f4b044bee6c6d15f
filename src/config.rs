//! Command-line settings and logging initialization.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use crate::render::OutputFormat;

/// Database used when neither `--database` nor `CLUB_DATABASE` is given.
pub const DEFAULT_DATABASE: &str = "sqlite/db/pythonsqlite.db";

/// Print the fixed country club reports from a SQLite database.
#[derive(Parser, Debug, Clone)]
#[command(name = "country-club-reports")]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// Path to the SQLite database file
    #[arg(long, env = "CLUB_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(clap::Args, Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter used when RUST_LOG is not set
    #[arg(id = "log_level", long = "log-level", default_value = "warn")]
    pub level: String,

    /// Log line format
    #[arg(
        id = "log_format",
        long = "log-format",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber. Logs go to stderr so stdout only
    /// carries report output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format {
            LogFormat::Json => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            LogFormat::Pretty => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
