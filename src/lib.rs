//! Order migration: loads the order-status spreadsheet into the production
//! panel database.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, workbook)
//!
//! # Modules
//!
//! - [`cli`]: Command-line options, logging setup and exit codes
//! - [`config`]: Connection and run settings
//! - [`order_import`]: Purge-and-replace import of spreadsheet orders

pub mod cli;
pub mod config;
pub mod order_import;
