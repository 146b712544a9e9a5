//! `PostgreSQL` order store backed by a single Diesel connection.

use super::{
    connection::establish,
    models::NewOrderRow,
    schema::{pedidos_tb, status_td},
};
use crate::config::ConnectionSettings;
use crate::order_import::{
    domain::{NewOrder, StatusId},
    ports::{ImportTransaction, OrderStore, StoreError, StoreResult},
};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

/// Order store owning one `PostgreSQL` connection.
///
/// The connection is closed when the store is dropped.
pub struct PostgresOrderStore {
    connection: PgConnection,
}

impl PostgresOrderStore {
    /// Connects using `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] when the connection fails.
    pub fn connect(settings: &ConnectionSettings) -> StoreResult<Self> {
        establish(settings).map(Self::from_connection)
    }

    /// Wraps an already established connection.
    #[must_use]
    pub const fn from_connection(connection: PgConnection) -> Self {
        Self { connection }
    }

    /// Returns the underlying connection.
    #[must_use]
    pub fn into_connection(self) -> PgConnection {
        self.connection
    }
}

enum TransactionFailure<E> {
    Work(E),
    Database(DieselError),
}

impl<E> From<DieselError> for TransactionFailure<E> {
    fn from(err: DieselError) -> Self {
        Self::Database(err)
    }
}

impl OrderStore for PostgresOrderStore {
    fn run_in_transaction<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn ImportTransaction) -> Result<T, E>,
        E: From<StoreError>,
    {
        self.connection
            .transaction::<T, TransactionFailure<E>, _>(|connection| {
                let mut transaction = PgImportTransaction { connection };
                work(&mut transaction).map_err(TransactionFailure::Work)
            })
            .map_err(|failure| match failure {
                TransactionFailure::Work(err) => err,
                TransactionFailure::Database(err) => E::from(StoreError::from(err)),
            })
    }
}

struct PgImportTransaction<'conn> {
    connection: &'conn mut PgConnection,
}

impl ImportTransaction for PgImportTransaction<'_> {
    fn purge_imported(&mut self, origin_tag: &str) -> StoreResult<usize> {
        diesel::delete(pedidos_tb::table.filter(pedidos_tb::perfil_alteracao.eq(origin_tag)))
            .execute(&mut *self.connection)
            .map_err(StoreError::from)
    }

    fn find_status_id(&mut self, status_name: &str) -> StoreResult<Option<StatusId>> {
        let id = status_td::table
            .filter(status_td::nome_status.eq(status_name))
            .select(status_td::id)
            .first::<i32>(&mut *self.connection)
            .optional()?;
        Ok(id.map(StatusId::new))
    }

    fn insert_order(&mut self, order: &NewOrder) -> StoreResult<()> {
        diesel::insert_into(pedidos_tb::table)
            .values(&NewOrderRow::from(order))
            .execute(&mut *self.connection)?;
        Ok(())
    }
}
