//! Connection provider for the order import.
//!
//! A configured connection URL wins; otherwise a libpq keyword/value string
//! is assembled from the discrete settings. No retry is attempted.

use diesel::Connection;
use diesel::pg::PgConnection;
use tracing::{info, warn};

use crate::config::ConnectionSettings;
use crate::order_import::ports::{StoreError, StoreResult};

/// Where the connection parameters came from.
#[derive(Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    /// A configured connection URL.
    DatabaseUrl(String),
    /// A keyword/value string built from the local settings.
    LocalSettings(String),
}

impl ConnectionTarget {
    /// Chooses the connection string for `settings`.
    #[must_use]
    pub fn resolve(settings: &ConnectionSettings) -> Self {
        settings.database_url.as_deref().map_or_else(
            || Self::LocalSettings(keyword_value_string(settings)),
            |url| Self::DatabaseUrl(normalize_scheme(url)),
        )
    }

    /// Returns the string handed to libpq.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DatabaseUrl(value) | Self::LocalSettings(value) => value,
        }
    }
}

// The connection string may carry a password.
impl std::fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseUrl(_) => f.write_str("DatabaseUrl(<redacted>)"),
            Self::LocalSettings(_) => f.write_str("LocalSettings(<redacted>)"),
        }
    }
}

/// Opens a connection using `settings`.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] when the server cannot be reached or
/// rejects the credentials.
pub fn establish(settings: &ConnectionSettings) -> StoreResult<PgConnection> {
    let target = ConnectionTarget::resolve(settings);
    match &target {
        ConnectionTarget::DatabaseUrl(_) => info!("connecting via DATABASE_URL"),
        ConnectionTarget::LocalSettings(_) => warn!(
            host = %settings.host,
            port = settings.port,
            database = %settings.database,
            "DATABASE_URL not set; using local connection settings"
        ),
    }
    PgConnection::establish(target.as_str()).map_err(|err| StoreError::connection(err.to_string()))
}

/// Rewrites a `postgresql://` scheme to `postgres://`.
#[must_use]
pub fn normalize_scheme(url: &str) -> String {
    url.strip_prefix("postgresql://").map_or_else(
        || url.to_owned(),
        |rest| format!("postgres://{rest}"),
    )
}

/// Quotes a value for a libpq keyword/value connection string.
///
/// Wraps the value in single quotes and backslash-escapes embedded quotes
/// and backslashes.
#[must_use]
pub fn quote_conninfo_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

fn keyword_value_string(settings: &ConnectionSettings) -> String {
    let port = settings.port.to_string();
    let mut pairs = vec![
        ("host", settings.host.as_str()),
        ("port", port.as_str()),
        ("dbname", settings.database.as_str()),
        ("user", settings.user.as_str()),
    ];
    if let Some(password) = settings.password.as_deref() {
        pairs.push(("password", password));
    }
    pairs.push(("client_encoding", settings.client_encoding.as_str()));

    pairs
        .into_iter()
        .map(|(keyword, value)| format!("{keyword}={}", quote_conninfo_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
}
