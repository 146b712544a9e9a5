//! Replaces spreadsheet-imported orders with the current workbook rows.
//!
//! Usage:
//!
//! ```text
//! order_migrate [--sheet <path>] [--database-url <url>] [--output-json]
//! ```
//!
//! Exit codes: `0` imported, `2` status missing (previous imports purged),
//! `3` spreadsheet missing or unreadable, `4` header or row mapping failed,
//! `5` connection or database failure.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use order_migrate::cli::{Cli, exit_code, init_logging};
use order_migrate::order_import::{
    adapters::{postgres::PostgresOrderStore, workbook::WorkbookSheetSource},
    services::{MigrationError, MigrationOutcome, MigrationResult, OrderMigrationService},
};
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if init_logging(cli.verbosity, cli.log_format).is_err() {
        return ExitCode::FAILURE;
    }

    let result = run(&cli);
    if cli.output_json
        && let Ok(outcome) = &result
    {
        print_outcome(outcome);
    }
    ExitCode::from(exit_code(&result))
}

fn run(cli: &Cli) -> MigrationResult<MigrationOutcome> {
    let settings = cli.settings();
    info!(sheet = %settings.spreadsheet_path, "starting order migration");

    let store = PostgresOrderStore::connect(&settings.connection).map_err(|err| {
        error!(error = %err, "database connection failed");
        MigrationError::from(err)
    })?;
    let source = WorkbookSheetSource::new(settings.spreadsheet_path.clone());
    let mut service =
        OrderMigrationService::new(store, Arc::new(DefaultClock), settings.import_plan());
    info!(
        status = %service.plan().status_name(),
        origin_tag = %service.plan().origin_tag(),
        "import plan resolved"
    );
    service.run(&source)
}

#[expect(
    clippy::print_stdout,
    reason = "the JSON outcome is the machine-readable output of the binary"
)]
fn print_outcome(outcome: &MigrationOutcome) {
    match serde_json::to_string(outcome) {
        Ok(json) => println!("{json}"),
        Err(err) => error!(error = %err, "failed to serialize run outcome"),
    }
}
