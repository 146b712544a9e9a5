//! Given steps for order import BDD scenarios.

use super::world::{
    MANUAL_TAG, ORIGIN_TAG, OrderImportWorld, parse_codes, sheet_with_codes, stored_order,
};
use eyre::WrapErr;
use order_migrate::order_import::{adapters::memory::InMemorySheetSource, domain::StatusId};
use rstest_bdd_macros::given;

#[given(r#"the status "{name}" exists with id {id:i32}"#)]
fn status_exists(world: &mut OrderImportWorld, name: String, id: i32) {
    world.status = Some((name, StatusId::new(id)));
}

#[given("the status table is empty")]
fn status_table_is_empty(world: &mut OrderImportWorld) {
    world.status = None;
}

#[given(r#"a spreadsheet with orders "{codes}""#)]
fn spreadsheet_with_orders(world: &mut OrderImportWorld, codes: String) {
    world.source = InMemorySheetSource::new(sheet_with_codes(&parse_codes(&codes)));
}

#[given("the spreadsheet is missing")]
fn spreadsheet_is_missing(world: &mut OrderImportWorld) {
    world.source = InMemorySheetSource::missing("dados/Status_dos_pedidos.xlsm");
}

#[given("{count:usize} previously imported orders")]
fn previously_imported_orders(
    world: &mut OrderImportWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    for n in 1..=count {
        world
            .store
            .seed_order(stored_order(&format!("OLD-{n}"), ORIGIN_TAG)?);
    }
    Ok(())
}

#[given(r#"a manually registered order "{code}""#)]
fn manually_registered_order(
    world: &mut OrderImportWorld,
    code: String,
) -> Result<(), eyre::Report> {
    world.store.seed_order(stored_order(&code, MANUAL_TAG)?);
    Ok(())
}

#[given("the database rejects insert number {attempt:usize}")]
fn database_rejects_insert(world: &mut OrderImportWorld, attempt: usize) {
    world.rejected_insert = Some(attempt);
}

#[given("the order migration has already run")]
fn migration_already_ran(world: &mut OrderImportWorld) -> Result<(), eyre::Report> {
    world.run_migration().wrap_err("run the first import")?;
    Ok(())
}
