//! Service layer for replacing spreadsheet-imported orders.

use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::order_import::{
    domain::{ImportPlan, MappingError, StatusId, prepare_orders},
    ports::{ImportTransaction, OrderStore, SheetError, SheetSource, StoreError},
};

/// Counts describing a completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Previously imported orders deleted by this run.
    pub purged: usize,
    /// Non-blank rows read from the spreadsheet.
    pub rows_read: usize,
    /// Orders inserted.
    pub inserted: usize,
    /// Status assigned to every inserted order.
    pub status_id: StatusId,
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// The spreadsheet was imported and committed.
    Imported(MigrationReport),
    /// The status is missing from the reference data.
    ///
    /// The purge is still committed, so the table is left without imported
    /// orders.
    StatusMissing {
        /// Previously imported orders deleted by this run.
        purged: usize,
        /// Status name that was looked up.
        status_name: String,
    },
}

/// Errors that abort an import. The transaction is rolled back for each.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The spreadsheet could not be read.
    #[error(transparent)]
    Sheet(#[from] SheetError),
    /// A row or the header could not be mapped.
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// The database rejected an operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MigrationError {
    /// Returns the process exit code reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Sheet(_) => 3,
            Self::Mapping(_) => 4,
            Self::Store(_) => 5,
        }
    }

    /// Returns a likely cause worth showing to the operator, if one is known.
    ///
    /// Only constraint violations carry a hint: they usually come from
    /// duplicate values in the order column of the spreadsheet.
    #[must_use]
    pub const fn likely_cause(&self) -> Option<&'static str> {
        match self {
            Self::Store(StoreError::Constraint(_)) => Some(
                "duplicate values in the order column of the spreadsheet are a likely cause",
            ),
            Self::Sheet(_) | Self::Mapping(_) | Self::Store(_) => None,
        }
    }
}

/// Result type for migration service operations.
pub type MigrationResult<T> = Result<T, MigrationError>;

/// Orchestrates one purge-and-replace import.
pub struct OrderMigrationService<S, C>
where
    S: OrderStore,
    C: Clock,
{
    store: S,
    clock: Arc<C>,
    plan: ImportPlan,
}

impl<S, C> OrderMigrationService<S, C>
where
    S: OrderStore,
    C: Clock,
{
    /// Creates a migration service.
    #[must_use]
    pub const fn new(store: S, clock: Arc<C>, plan: ImportPlan) -> Self {
        Self { store, clock, plan }
    }

    /// Returns the import plan.
    #[must_use]
    pub const fn plan(&self) -> &ImportPlan {
        &self.plan
    }

    /// Consumes the service and returns its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Replaces the imported orders with the rows of `source`.
    ///
    /// Every step runs in one transaction. A missing status commits the
    /// purge and inserts nothing; any error rolls the whole run back.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError`] when the spreadsheet cannot be read or
    /// mapped, or the database rejects an operation.
    pub fn run<R>(&mut self, source: &R) -> MigrationResult<MigrationOutcome>
    where
        R: SheetSource + ?Sized,
    {
        let plan = &self.plan;
        let clock = &*self.clock;
        let result = self
            .store
            .run_in_transaction(|transaction| import(transaction, source, plan, clock));

        match &result {
            Ok(MigrationOutcome::Imported(report)) => info!(
                inserted = report.inserted,
                purged = report.purged,
                "orders migrated"
            ),
            Ok(MigrationOutcome::StatusMissing { status_name, .. }) => {
                warn!(status = %status_name, "import skipped; previous imported orders removed");
            }
            Err(err) => log_failure(err),
        }
        result
    }
}

fn import<R, C>(
    transaction: &mut dyn ImportTransaction,
    source: &R,
    plan: &ImportPlan,
    clock: &C,
) -> MigrationResult<MigrationOutcome>
where
    R: SheetSource + ?Sized,
    C: Clock + ?Sized,
{
    info!(origin_tag = %plan.origin_tag(), "purging previously imported orders");
    let purged = transaction.purge_imported(plan.origin_tag())?;
    info!(purged, "previously imported orders purged");

    let Some(status_id) = transaction.find_status_id(plan.status_name())? else {
        error!(status = %plan.status_name(), "status not found in status_td");
        return Ok(MigrationOutcome::StatusMissing {
            purged,
            status_name: plan.status_name().to_owned(),
        });
    };
    info!(status = %plan.status_name(), %status_id, "status resolved");

    let sheet = source.read_first_sheet()?.without_blank_rows();
    let rows_read = sheet.row_count();
    info!(rows = rows_read, "orders found in spreadsheet");

    let pending = prepare_orders(&sheet)?;
    let mut inserted = 0_usize;
    for order in pending {
        let new_order = order.into_new_order(status_id, plan.origin_tag(), clock.utc());
        transaction.insert_order(&new_order)?;
        inserted = inserted.saturating_add(1);
    }

    Ok(MigrationOutcome::Imported(MigrationReport {
        purged,
        rows_read,
        inserted,
        status_id,
    }))
}

fn log_failure(err: &MigrationError) {
    match err {
        MigrationError::Sheet(SheetError::NotFound(path)) => {
            error!(path = %path, "spreadsheet not found; transaction rolled back");
        }
        MigrationError::Sheet(sheet_err) => {
            error!(error = %sheet_err, "spreadsheet could not be read; transaction rolled back");
        }
        MigrationError::Mapping(MappingError::MissingColumn(column)) => {
            error!(
                column = %column,
                "column missing from spreadsheet header; transaction rolled back"
            );
        }
        MigrationError::Mapping(mapping_err) => {
            error!(error = %mapping_err, "spreadsheet row rejected; transaction rolled back");
        }
        MigrationError::Store(store_err) => {
            error!(error = %store_err, "database error; transaction rolled back");
        }
    }
    if let Some(cause) = err.likely_cause() {
        warn!("{cause}");
    }
}
