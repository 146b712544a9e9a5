//! Shared world state for order import BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use order_migrate::order_import::{
    adapters::memory::{InMemoryOrderStore, InMemorySheetSource},
    domain::{CellValue, ImportPlan, NewOrder, Priority, RawSheet, StatusId},
    services::{MigrationOutcome, MigrationResult, OrderMigrationService},
};
use rstest::fixture;

/// Origin tag used by the default import plan.
pub const ORIGIN_TAG: &str = "Importada Planilha";
/// Origin tag of orders registered through the panel.
pub const MANUAL_TAG: &str = "Cadastro Manual";

/// Scenario world for order import behaviour tests.
pub struct OrderImportWorld {
    pub store: InMemoryOrderStore,
    pub status: Option<(String, StatusId)>,
    pub rejected_insert: Option<usize>,
    pub source: InMemorySheetSource,
    pub last_result: Option<MigrationResult<MigrationOutcome>>,
}

impl OrderImportWorld {
    /// Creates a world with an empty store and an empty spreadsheet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: InMemoryOrderStore::new(),
            status: None,
            rejected_insert: None,
            source: InMemorySheetSource::new(sheet_with_codes(&[])),
            last_result: None,
        }
    }

    /// Runs one import against the world's store and spreadsheet.
    pub fn run_migration(&mut self) -> MigrationResult<MigrationOutcome> {
        let mut store = self.store.clone();
        if let Some((name, id)) = &self.status {
            store = store.with_status(name.clone(), *id);
        }
        if let Some(attempt) = self.rejected_insert {
            store = store.reject_insert_at(attempt);
        }
        OrderMigrationService::new(store, Arc::new(DefaultClock), ImportPlan::default())
            .run(&self.source)
    }
}

impl Default for OrderImportWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> OrderImportWorld {
    OrderImportWorld::default()
}

/// Splits a comma-separated list of order codes.
pub fn parse_codes(codes: &str) -> Vec<String> {
    codes
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Builds a sheet with the production header and one row per order code.
pub fn sheet_with_codes(codes: &[String]) -> RawSheet {
    let headers = ["Pedido", " Equipamento ", "PV", "Servico", "Data Status", "Qtd_Maquinas"]
        .into_iter()
        .map(CellValue::from)
        .collect();
    let rows = codes
        .iter()
        .map(|code| {
            vec![
                CellValue::from(code.as_str()),
                CellValue::from("Fresadora"),
                CellValue::Float(7781.0),
                CellValue::from("Montagem"),
                CellValue::DateTime("2025-05-20 00:00:00".to_owned()),
                CellValue::Int(1),
            ]
        })
        .collect();
    RawSheet::new(headers, rows)
}

/// Builds an order as another channel would have stored it.
pub fn stored_order(code: &str, origin_tag: &str) -> eyre::Result<NewOrder> {
    Ok(NewOrder {
        order_code: Some(code.to_owned()),
        equipment: None,
        purchase_order: None,
        service_description: None,
        status_id: StatusId::new(7),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        quantity: None,
        priority: Priority::from_index(0)?,
        origin_tag: origin_tag.to_owned(),
        urgent: false,
    })
}
