//! Command-line surface of the `order_migrate` binary.
//!
//! Every option can also be supplied through the environment:
//!
//! - `DATABASE_URL`: full connection URL, preferred over the discrete fields
//! - `PGHOST`, `PGPORT`, `PGDATABASE`, `PGUSER`, `PGPASSWORD`: local settings
//! - `ORDER_IMPORT_SHEET`: spreadsheet path

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::config::{
    ConnectionSettings, DEFAULT_CLIENT_ENCODING, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_SPREADSHEET_PATH, DEFAULT_USER, MigrationSettings,
};
use crate::order_import::domain::{DEFAULT_ORIGIN_TAG, DEFAULT_STATUS_NAME};
use crate::order_import::services::{MigrationOutcome, MigrationResult};

/// Exit code reported when the status is missing and nothing was imported.
pub const EXIT_STATUS_MISSING: u8 = 2;

/// Replace spreadsheet-imported orders in the production panel database.
#[derive(Debug, Parser)]
#[command(name = "order_migrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Full connection URL; `postgresql://` is accepted.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host used when no URL is given.
    #[arg(long, env = "PGHOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Database port used when no URL is given.
    #[arg(long, env = "PGPORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database name used when no URL is given.
    #[arg(long, env = "PGDATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Database user used when no URL is given.
    #[arg(long, env = "PGUSER", default_value = DEFAULT_USER)]
    pub user: String,

    /// Database password used when no URL is given.
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Spreadsheet to import.
    #[arg(long, env = "ORDER_IMPORT_SHEET", default_value = DEFAULT_SPREADSHEET_PATH)]
    pub sheet: Utf8PathBuf,

    /// Status assigned to every imported order.
    #[arg(long, default_value = DEFAULT_STATUS_NAME)]
    pub status_name: String,

    /// Tag marking imported orders; rows carrying it are replaced.
    #[arg(long, default_value = DEFAULT_ORIGIN_TAG)]
    pub origin_tag: String,

    /// Minimum level of emitted log events. `RUST_LOG` overrides it.
    #[arg(long, value_enum, default_value_t = Verbosity::Info)]
    pub verbosity: Verbosity,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Print the run outcome as JSON on stdout.
    #[arg(long)]
    pub output_json: bool,
}

impl Cli {
    /// Builds the run settings from the parsed options.
    #[must_use]
    pub fn settings(&self) -> MigrationSettings {
        MigrationSettings {
            connection: ConnectionSettings {
                database_url: self.database_url.clone(),
                host: self.host.clone(),
                port: self.port,
                database: self.database.clone(),
                user: self.user.clone(),
                password: self.password.clone(),
                client_encoding: DEFAULT_CLIENT_ENCODING.to_owned(),
            },
            spreadsheet_path: self.sheet.clone(),
            status_name: self.status_name.clone(),
            origin_tag: self.origin_tag.clone(),
        }
    }
}

/// Minimum log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Verbosity {
    /// Everything, including per-step detail.
    Debug,
    /// Progress lines.
    #[default]
    Info,
    /// Fallbacks and skipped runs.
    Warn,
    /// Failures only.
    Error,
}

impl Verbosity {
    const fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Installs the global `tracing` subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init_logging(verbosity: Verbosity, format: LogFormat) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
}

/// Maps the result of a run to the process exit code.
///
/// `0` imported, `2` status missing, `3` spreadsheet, `4` mapping, `5`
/// database.
#[must_use]
pub const fn exit_code(result: &MigrationResult<MigrationOutcome>) -> u8 {
    match result {
        Ok(MigrationOutcome::Imported(_)) => 0,
        Ok(MigrationOutcome::StatusMissing { .. }) => EXIT_STATUS_MISSING,
        Err(err) => err.exit_code(),
    }
}
