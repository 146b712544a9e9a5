//! Port contracts for the order import.
//!
//! Ports define infrastructure-agnostic interfaces used by the migration
//! service.

pub mod sheet_source;
pub mod store;

pub use sheet_source::{SheetError, SheetResult, SheetSource};
pub use store::{ImportTransaction, OrderStore, StoreError, StoreResult};
