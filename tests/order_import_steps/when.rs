//! When steps for order import BDD scenarios.

use super::world::OrderImportWorld;
use rstest_bdd_macros::when;

#[when("the order migration runs")]
fn order_migration_runs(world: &mut OrderImportWorld) {
    let result = world.run_migration();
    world.last_result = Some(result);
}
