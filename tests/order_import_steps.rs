//! Behaviour tests for the spreadsheet order import.

#[path = "order_import_steps/mod.rs"]
mod order_import_steps_defs;

use order_import_steps_defs::world::{OrderImportWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/order_import.feature",
    name = "Import assigns priorities in sheet order"
)]
fn import_assigns_priorities(world: OrderImportWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/order_import.feature",
    name = "Re-running the import replaces the previous batch"
)]
fn rerun_replaces_previous_batch(world: OrderImportWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/order_import.feature",
    name = "Manually registered orders are left alone"
)]
fn manual_orders_left_alone(world: OrderImportWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/order_import.feature",
    name = "Missing status purges without importing"
)]
fn missing_status_purges(world: OrderImportWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/order_import.feature",
    name = "A rejected insert rolls the whole run back"
)]
fn rejected_insert_rolls_back(world: OrderImportWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/order_import.feature",
    name = "A missing spreadsheet rolls the purge back"
)]
fn missing_spreadsheet_rolls_back(world: OrderImportWorld) {
    let _ = world;
}
