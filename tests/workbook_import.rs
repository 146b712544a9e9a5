//! Imports the sample workbook through the in-memory store.

use std::sync::Arc;

use mockable::DefaultClock;
use order_migrate::order_import::{
    adapters::{memory::InMemoryOrderStore, workbook::WorkbookSheetSource},
    domain::{CellValue, ImportPlan, StatusId},
    ports::SheetSource,
    services::{MigrationOutcome, MigrationReport, OrderMigrationService},
};
use rstest::{fixture, rstest};

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/order_status.xlsx"
);

#[fixture]
fn source() -> WorkbookSheetSource {
    WorkbookSheetSource::new(FIXTURE)
}

#[rstest]
fn sample_workbook_keeps_header_and_blank_rows(source: WorkbookSheetSource) {
    let sheet = source.read_first_sheet().expect("fixture decodes");

    assert_eq!(sheet.row_count(), 4);
    assert_eq!(sheet.without_blank_rows().row_count(), 3);
}

#[rstest]
fn date_cells_are_read_as_calendar_text(source: WorkbookSheetSource) {
    let sheet = source.read_first_sheet().expect("fixture decodes");

    let status_dates: Vec<Option<String>> = sheet
        .rows()
        .iter()
        .map(|row| row.get(4).and_then(CellValue::as_text))
        .collect();
    assert_eq!(
        status_dates,
        [
            Some("2025-02-12 00:00:00".to_owned()),
            None,
            None,
            Some("2025-02-14 00:00:00".to_owned()),
        ]
    );
}

#[rstest]
fn sample_workbook_is_imported_in_sheet_order(source: WorkbookSheetSource) {
    let store = InMemoryOrderStore::new().with_status("Aguardando Chegada", StatusId::new(7));
    let mut service =
        OrderMigrationService::new(store.clone(), Arc::new(DefaultClock), ImportPlan::default());

    let outcome = service.run(&source).expect("import succeeds");

    assert_eq!(
        outcome,
        MigrationOutcome::Imported(MigrationReport {
            purged: 0,
            rows_read: 3,
            inserted: 3,
            status_id: StatusId::new(7),
        })
    );
    let imported = store.orders_tagged("Importada Planilha");
    let summary: Vec<(i32, Option<&str>, Option<&str>, Option<i32>)> = imported
        .iter()
        .map(|order| {
            (
                order.priority.value(),
                order.order_code.as_deref(),
                order.purchase_order.as_deref(),
                order.quantity,
            )
        })
        .collect();
    assert_eq!(
        summary,
        [
            (1, Some("P-100"), Some("4521"), Some(2)),
            (2, None, Some("PV-77"), Some(1)),
            (3, Some("P-102"), Some("2025-02-10 00:00:00"), Some(3)),
        ]
    );
    assert_eq!(
        imported.first().and_then(|order| order.equipment.as_deref()),
        Some("Torno CNC")
    );
}
