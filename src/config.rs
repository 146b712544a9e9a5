//! Run configuration for the order import.
//!
//! Every value has a non-secret default so the import can run against a
//! local development database without any environment. The password is never
//! defaulted; when it is absent libpq falls back to `PGPASSWORD` or
//! `~/.pgpass`.

use camino::Utf8PathBuf;
use std::fmt;

use crate::order_import::domain::ImportPlan;

/// Default database host used when no connection URL is configured.
pub const DEFAULT_HOST: &str = "localhost";
/// Default database port.
pub const DEFAULT_PORT: u16 = 5432;
/// Default database name.
pub const DEFAULT_DATABASE: &str = "pedidos_db";
/// Default database user.
pub const DEFAULT_USER: &str = "postgres";
/// Default client encoding.
pub const DEFAULT_CLIENT_ENCODING: &str = "utf8";
/// Default spreadsheet location, relative to the working directory.
pub const DEFAULT_SPREADSHEET_PATH: &str = "dados/Status_dos_pedidos.xlsm";

/// Parameters used to open the database connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Full connection URL; takes precedence over the discrete fields.
    pub database_url: Option<String>,
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Database user.
    pub user: String,
    /// Optional password.
    pub password: Option<String>,
    /// Client encoding requested from the server.
    pub client_encoding: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            database_url: None,
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_owned(),
            user: DEFAULT_USER.to_owned(),
            password: None,
            client_encoding: DEFAULT_CLIENT_ENCODING.to_owned(),
        }
    }
}

impl ConnectionSettings {
    /// Sets the connection URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Sets the password used with the discrete connection fields.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

// Credentials must never reach the logs.
impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("client_encoding", &self.client_encoding)
            .finish()
    }
}

/// Complete settings for one import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSettings {
    /// Database connection parameters.
    pub connection: ConnectionSettings,
    /// Spreadsheet to import.
    pub spreadsheet_path: Utf8PathBuf,
    /// Status name every imported order is assigned.
    pub status_name: String,
    /// Origin tag stamped on imported orders.
    pub origin_tag: String,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        let plan = ImportPlan::default();
        Self {
            connection: ConnectionSettings::default(),
            spreadsheet_path: Utf8PathBuf::from(DEFAULT_SPREADSHEET_PATH),
            status_name: plan.status_name().to_owned(),
            origin_tag: plan.origin_tag().to_owned(),
        }
    }
}

impl MigrationSettings {
    /// Returns the status and tagging rules for this run.
    #[must_use]
    pub fn import_plan(&self) -> ImportPlan {
        ImportPlan::new(self.status_name.clone(), self.origin_tag.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionSettings, MigrationSettings};

    #[test]
    fn defaults_target_local_database_without_password() {
        let settings = ConnectionSettings::default();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 5432);
        assert_eq!(settings.database, "pedidos_db");
        assert_eq!(settings.user, "postgres");
        assert_eq!(settings.client_encoding, "utf8");
        assert!(settings.password.is_none());
        assert!(settings.database_url.is_none());
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let settings = ConnectionSettings::default()
            .with_database_url("postgres://admin:hunter2@db/pedidos")
            .with_password("hunter2");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn import_plan_mirrors_settings() {
        let settings = MigrationSettings {
            status_name: "Em Teste".to_owned(),
            origin_tag: "Carga Manual".to_owned(),
            ..MigrationSettings::default()
        };
        let plan = settings.import_plan();
        assert_eq!(plan.status_name(), "Em Teste");
        assert_eq!(plan.origin_tag(), "Carga Manual");
    }

    #[test]
    fn default_spreadsheet_path_points_at_data_directory() {
        let settings = MigrationSettings::default();
        assert_eq!(settings.spreadsheet_path.as_str(), "dados/Status_dos_pedidos.xlsm");
        assert_eq!(settings.status_name, "Aguardando Chegada");
        assert_eq!(settings.origin_tag, "Importada Planilha");
    }
}
