//! In-memory order store with snapshot transactions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::order_import::{
    domain::{NewOrder, StatusId},
    ports::{ImportTransaction, OrderStore, StoreError, StoreResult},
};

/// An order held by [`InMemoryOrderStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOrder {
    /// Surrogate key assigned on insert.
    pub id: i64,
    /// Inserted values.
    pub order: NewOrder,
}

/// Thread-safe in-memory order store.
///
/// Clones share state, so a test can keep a handle while the service owns
/// another. Each transaction works on a copy of the state which replaces the
/// shared state only on commit.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<RwLock<InMemoryOrderState>>,
}

#[derive(Debug, Clone, Default)]
struct InMemoryOrderState {
    statuses: HashMap<String, StatusId>,
    orders: Vec<StoredOrder>,
    next_id: i64,
    reject_insert_at: Option<usize>,
    commits: usize,
    rollbacks: usize,
}

impl InMemoryOrderStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a status to the reference data.
    #[must_use]
    pub fn with_status(self, name: impl Into<String>, id: StatusId) -> Self {
        self.update(|state| {
            state.statuses.insert(name.into(), id);
        });
        self
    }

    /// Makes the `attempt`-th insert (1-based) of every transaction fail the
    /// way a unique-key violation would.
    #[must_use]
    pub fn reject_insert_at(self, attempt: usize) -> Self {
        self.update(|state| state.reject_insert_at = Some(attempt));
        self
    }

    /// Stores an order outside of any import, as another channel would.
    pub fn seed_order(&self, order: NewOrder) {
        self.update(|state| {
            push_order(state, order);
        });
    }

    /// Returns all stored orders in insertion order.
    #[must_use]
    pub fn orders(&self) -> Vec<StoredOrder> {
        self.read(|state| state.orders.clone())
    }

    /// Returns the stored orders carrying `origin_tag`.
    #[must_use]
    pub fn orders_tagged(&self, origin_tag: &str) -> Vec<NewOrder> {
        self.read(|state| {
            state
                .orders
                .iter()
                .filter(|stored| stored.order.origin_tag == origin_tag)
                .map(|stored| stored.order.clone())
                .collect()
        })
    }

    /// Returns how many transactions committed.
    #[must_use]
    pub fn commits(&self) -> usize {
        self.read(|state| state.commits)
    }

    /// Returns how many transactions rolled back.
    #[must_use]
    pub fn rollbacks(&self) -> usize {
        self.read(|state| state.rollbacks)
    }

    fn read<T>(&self, f: impl FnOnce(&InMemoryOrderState) -> T) -> T {
        match self.state.read() {
            Ok(state) => f(&state),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn update(&self, f: impl FnOnce(&mut InMemoryOrderState)) {
        match self.state.write() {
            Ok(mut state) => f(&mut state),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

fn push_order(state: &mut InMemoryOrderState, order: NewOrder) {
    state.next_id = state.next_id.saturating_add(1);
    let id = state.next_id;
    state.orders.push(StoredOrder { id, order });
}

impl OrderStore for InMemoryOrderStore {
    fn run_in_transaction<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn ImportTransaction) -> Result<T, E>,
        E: From<StoreError>,
    {
        let snapshot = self.read(Clone::clone);
        let mut transaction = InMemoryTransaction {
            working: snapshot,
            inserts: 0,
        };

        let result = work(&mut transaction);
        let working = transaction.working;
        self.update(|state| {
            if result.is_ok() {
                *state = working;
                state.commits = state.commits.saturating_add(1);
            } else {
                state.rollbacks = state.rollbacks.saturating_add(1);
            }
        });
        result
    }
}

struct InMemoryTransaction {
    working: InMemoryOrderState,
    inserts: usize,
}

impl ImportTransaction for InMemoryTransaction {
    fn purge_imported(&mut self, origin_tag: &str) -> StoreResult<usize> {
        let before = self.working.orders.len();
        self.working
            .orders
            .retain(|stored| stored.order.origin_tag != origin_tag);
        Ok(before.saturating_sub(self.working.orders.len()))
    }

    fn find_status_id(&mut self, status_name: &str) -> StoreResult<Option<StatusId>> {
        Ok(self.working.statuses.get(status_name).copied())
    }

    fn insert_order(&mut self, order: &NewOrder) -> StoreResult<()> {
        self.inserts = self.inserts.saturating_add(1);
        if self.working.reject_insert_at == Some(self.inserts) {
            return Err(StoreError::constraint(
                "duplicate key value violates unique constraint \"pedidos_tb_codigo_pedido_key\"",
            ));
        }
        push_order(&mut self.working, order.clone());
        Ok(())
    }
}
