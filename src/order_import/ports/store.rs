//! Persistence port for imported orders.

use crate::order_import::domain::{NewOrder, StatusId};
use diesel::result::DatabaseErrorKind;
use std::sync::Arc;
use thiserror::Error;

/// Result type for order store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Operations available inside an import transaction.
pub trait ImportTransaction {
    /// Deletes every order carrying `origin_tag` and returns how many went.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the delete fails.
    fn purge_imported(&mut self, origin_tag: &str) -> StoreResult<usize>;

    /// Looks up the id of the status named `status_name`.
    ///
    /// Returns `None` when the reference table has no such status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the lookup fails.
    fn find_status_id(&mut self, status_name: &str) -> StoreResult<Option<StatusId>>;

    /// Inserts one order. Order codes are not required to be unique.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the insert is rejected.
    fn insert_order(&mut self, order: &NewOrder) -> StoreResult<()>;
}

/// Order persistence contract.
pub trait OrderStore {
    /// Runs `work` inside a single transaction.
    ///
    /// The transaction commits when `work` returns `Ok` and rolls back when
    /// it returns `Err`, leaving the store as it was before the call.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `work`, or a [`StoreError`] converted
    /// into `E` when the transaction itself cannot begin or commit.
    fn run_in_transaction<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn ImportTransaction) -> Result<T, E>,
        E: From<StoreError>;
}

/// Errors returned by order store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The database could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// A row broke a unique or not-null constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// A statement failed.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a constraint violation error.
    #[must_use]
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    /// Wraps a database error.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::NotNullViolation,
                info,
            ) => Self::constraint(info.message()),
            other => Self::database(other),
        }
    }
}
