//! Order records and the rows they become once stamped for insertion.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::{
    columns::{ColumnLayout, OrderColumns},
    error::MappingError,
    sheet::{CellValue, RawSheet},
};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Surrogate key of a row in the status reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StatusId(i32);

impl StatusId {
    /// Wraps a raw status key.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based rank of an order within one import, following sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(i32);

impl Priority {
    /// Returns the priority of the row at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::PriorityOverflow`] when the rank does not fit
    /// the database column.
    pub fn from_index(index: usize) -> Result<Self, MappingError> {
        index
            .checked_add(1)
            .and_then(|rank| i32::try_from(rank).ok())
            .map(Self)
            .ok_or(MappingError::PriorityOverflow(index))
    }

    /// Returns the rank.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// One normalized spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRecord {
    /// Order code; `None` when the cell was blank.
    pub order_code: Option<String>,
    /// Equipment description.
    pub equipment: Option<String>,
    /// Purchase order reference.
    pub purchase_order: Option<String>,
    /// Service description.
    pub service_description: Option<String>,
    /// Number of machines.
    pub quantity: Option<i32>,
}

impl OrderRecord {
    /// Reads the order fields out of a data row.
    ///
    /// Short rows are padded with empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidQuantity`] when the quantity cell holds
    /// something other than a whole number. `row` is only used for the
    /// error message.
    pub fn from_cells(
        cells: &[CellValue],
        columns: &OrderColumns,
        row: usize,
    ) -> Result<Self, MappingError> {
        let cell = |position: usize| cells.get(position).unwrap_or(&EMPTY_CELL);
        let quantity = cell(columns.quantity)
            .as_whole_number()
            .map_err(|value| MappingError::InvalidQuantity { row, value })?;

        Ok(Self {
            order_code: cell(columns.order_code).as_text(),
            equipment: cell(columns.equipment).as_text(),
            purchase_order: cell(columns.purchase_order).as_text(),
            service_description: cell(columns.service_description).as_text(),
            quantity,
        })
    }
}

/// A normalized record paired with its priority, waiting to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    /// Rank within this import.
    pub priority: Priority,
    /// Normalized fields.
    pub record: OrderRecord,
}

impl PendingOrder {
    /// Stamps the record with the per-run metadata.
    #[must_use]
    pub fn into_new_order(
        self,
        status_id: StatusId,
        origin_tag: &str,
        created_at: DateTime<Utc>,
    ) -> NewOrder {
        let OrderRecord {
            order_code,
            equipment,
            purchase_order,
            service_description,
            quantity,
        } = self.record;

        NewOrder {
            order_code,
            equipment,
            purchase_order,
            service_description,
            status_id,
            created_at,
            quantity,
            priority: self.priority,
            origin_tag: origin_tag.to_owned(),
            urgent: false,
        }
    }
}

/// An order row ready for insertion into the target table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Order code, null when blank in the sheet.
    pub order_code: Option<String>,
    /// Equipment description.
    pub equipment: Option<String>,
    /// Purchase order reference.
    pub purchase_order: Option<String>,
    /// Service description.
    pub service_description: Option<String>,
    /// Resolved workflow status.
    pub status_id: StatusId,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
    /// Number of machines.
    pub quantity: Option<i32>,
    /// Rank within the import.
    pub priority: Priority,
    /// Marks the row as spreadsheet-imported.
    pub origin_tag: String,
    /// Urgency flag; imported orders are never urgent.
    pub urgent: bool,
}

/// Normalizes headers, maps every data row and assigns priorities.
///
/// Blank rows should be dropped beforehand with
/// [`RawSheet::without_blank_rows`] so priorities stay contiguous.
///
/// # Errors
///
/// Returns [`MappingError`] when a required column is missing or a row
/// cannot be mapped.
pub fn prepare_orders(sheet: &RawSheet) -> Result<Vec<PendingOrder>, MappingError> {
    let columns = ColumnLayout::from_headers(sheet.headers()).resolve()?;
    sheet
        .rows()
        .iter()
        .enumerate()
        .map(|(index, cells)| {
            let priority = Priority::from_index(index)?;
            let row = index.saturating_add(1);
            let record = OrderRecord::from_cells(cells, &columns, row)?;
            Ok(PendingOrder { priority, record })
        })
        .collect()
}
