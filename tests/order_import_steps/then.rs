//! Then steps for order import BDD scenarios.

use super::world::{MANUAL_TAG, ORIGIN_TAG, OrderImportWorld, parse_codes};
use eyre::eyre;
use order_migrate::order_import::services::{
    MigrationError, MigrationOutcome, MigrationReport, MigrationResult,
};
use rstest_bdd_macros::then;

fn last_result(
    world: &OrderImportWorld,
) -> Result<&MigrationResult<MigrationOutcome>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre!("the migration has not run"))
}

fn last_report(world: &OrderImportWorld) -> Result<&MigrationReport, eyre::Report> {
    match last_result(world)? {
        Ok(MigrationOutcome::Imported(report)) => Ok(report),
        other => Err(eyre!("expected an imported outcome, got {other:?}")),
    }
}

#[then("the run reports {count:usize} inserted orders")]
fn run_reports_inserted(world: &OrderImportWorld, count: usize) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if report.inserted != count || report.rows_read != count {
        return Err(eyre!("expected {count} inserted orders, got {report:?}"));
    }
    Ok(())
}

#[then("the run reports {count:usize} purged orders")]
fn run_reports_purged(world: &OrderImportWorld, count: usize) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if report.purged != count {
        return Err(eyre!("expected {count} purged orders, got {}", report.purged));
    }
    Ok(())
}

#[then("the run reports the status as missing")]
fn run_reports_status_missing(world: &OrderImportWorld) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Ok(MigrationOutcome::StatusMissing { .. }) => Ok(()),
        other => Err(eyre!("expected a missing status outcome, got {other:?}")),
    }
}

#[then("the run fails with exit code {code:u8}")]
fn run_fails_with_exit_code(world: &OrderImportWorld, code: u8) -> Result<(), eyre::Report> {
    let err: &MigrationError = match last_result(world)? {
        Err(err) => err,
        Ok(outcome) => return Err(eyre!("expected a failure, got {outcome:?}")),
    };
    if err.exit_code() != code {
        return Err(eyre!("expected exit code {code}, got {} ({err})", err.exit_code()));
    }
    Ok(())
}

#[then(r#"the imported orders are "{codes}" with priorities 1 to {last:i32}"#)]
fn imported_orders_in_priority_order(
    world: &OrderImportWorld,
    codes: String,
    last: i32,
) -> Result<(), eyre::Report> {
    let imported = world.store.orders_tagged(ORIGIN_TAG);
    let actual: Vec<(i32, Option<String>)> = imported
        .into_iter()
        .map(|order| (order.priority.value(), order.order_code))
        .collect();
    let expected: Vec<(i32, Option<String>)> = (1..=last)
        .zip(parse_codes(&codes).into_iter().map(Some))
        .collect();
    if actual != expected {
        return Err(eyre!("expected {expected:?}, got {actual:?}"));
    }
    Ok(())
}

#[then("{count:usize} imported orders remain")]
fn imported_orders_remain(world: &OrderImportWorld, count: usize) -> Result<(), eyre::Report> {
    let remaining = world.store.orders_tagged(ORIGIN_TAG).len();
    if remaining != count {
        return Err(eyre!("expected {count} imported orders, found {remaining}"));
    }
    Ok(())
}

#[then(r#"the manually registered order "{code}" remains"#)]
fn manual_order_remains(world: &OrderImportWorld, code: String) -> Result<(), eyre::Report> {
    let manual = world.store.orders_tagged(MANUAL_TAG);
    if !manual
        .iter()
        .any(|order| order.order_code.as_deref() == Some(code.as_str()))
    {
        return Err(eyre!("manual order {code} was removed"));
    }
    Ok(())
}
