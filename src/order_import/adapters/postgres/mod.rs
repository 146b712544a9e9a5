//! `PostgreSQL` adapters for the order import.

mod connection;
mod models;
pub mod schema;
mod store;

pub use connection::{ConnectionTarget, establish, normalize_scheme, quote_conninfo_value};
pub use store::PostgresOrderStore;
