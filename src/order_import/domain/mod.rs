//! Domain model for the spreadsheet order import.
//!
//! The domain turns a loosely-typed sheet into explicit order records and
//! stamps them with the per-run import metadata. Reading the spreadsheet and
//! talking to the database stay outside of this boundary.

mod columns;
mod error;
mod order;
mod plan;
mod sheet;

pub use columns::{
    ColumnLayout, EQUIPMENT, ORDER_CODE, OrderColumns, PURCHASE_ORDER, QUANTITY,
    REQUIRED_COLUMNS, SERVICE_DESCRIPTION, STATUS_DATE, canonical_column, normalize_header,
};
pub use error::MappingError;
pub use order::{NewOrder, OrderRecord, PendingOrder, Priority, StatusId, prepare_orders};
pub use plan::{DEFAULT_ORIGIN_TAG, DEFAULT_STATUS_NAME, ImportPlan};
pub use sheet::{CellValue, RawSheet};
