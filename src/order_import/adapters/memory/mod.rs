//! In-memory adapters used by tests and dry runs.

mod sheet;
mod store;

pub use sheet::InMemorySheetSource;
pub use store::{InMemoryOrderStore, StoredOrder};
