//! Application services for the order import.

mod migration;

pub use migration::{
    MigrationError, MigrationOutcome, MigrationReport, MigrationResult, OrderMigrationService,
};
