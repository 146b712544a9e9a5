//! Header normalization and the mapping from sheet columns to order fields.

use super::{error::MappingError, sheet::CellValue};

/// Canonical key of the order code column.
pub const ORDER_CODE: &str = "order_code";
/// Canonical key of the equipment column.
pub const EQUIPMENT: &str = "equipment";
/// Canonical key of the purchase order column.
pub const PURCHASE_ORDER: &str = "purchase_order";
/// Canonical key of the service description column.
pub const SERVICE_DESCRIPTION: &str = "service_description";
/// Canonical key of the status date column. Read, never persisted.
pub const STATUS_DATE: &str = "status_date";
/// Canonical key of the machine quantity column.
pub const QUANTITY: &str = "quantity";

/// Columns that must be present for a sheet to be imported.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    ORDER_CODE,
    EQUIPMENT,
    PURCHASE_ORDER,
    SERVICE_DESCRIPTION,
    QUANTITY,
];

const RENAMES: [(&str, &str); 6] = [
    ("pedido", ORDER_CODE),
    ("equipamento", EQUIPMENT),
    ("pv", PURCHASE_ORDER),
    ("servico", SERVICE_DESCRIPTION),
    ("data_status", STATUS_DATE),
    ("qtd_maquinas", QUANTITY),
];

/// Trims, lowercases and replaces each space with an underscore.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Maps a normalized header onto its canonical key.
///
/// Unknown headers are returned unchanged.
#[must_use]
pub fn canonical_column(normalized: String) -> String {
    let renamed = RENAMES
        .iter()
        .find(|(source, _)| *source == normalized)
        .map(|(_, canonical)| *canonical);
    renamed.map_or(normalized, str::to_owned)
}

/// Normalized column keys in sheet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    keys: Vec<String>,
}

impl ColumnLayout {
    /// Normalizes and renames a header row.
    ///
    /// Blank header cells, including ones holding only spaces, become
    /// `unnamed_<index>`.
    #[must_use]
    pub fn from_headers(headers: &[CellValue]) -> Self {
        let keys = headers
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                cell.as_text()
                    .map(|raw| normalize_header(&raw))
                    .filter(|normalized| !normalized.is_empty())
                    .map_or_else(|| format!("unnamed_{index}"), canonical_column)
            })
            .collect();
        Self { keys }
    }

    /// Returns the normalized keys.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the first position of `key`.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }

    /// Locates every column in [`REQUIRED_COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingColumn`] naming the first required key
    /// that is absent.
    pub fn resolve(&self) -> Result<OrderColumns, MappingError> {
        let mut positions = [0_usize; REQUIRED_COLUMNS.len()];
        for (slot, key) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = self
                .position(key)
                .ok_or(MappingError::MissingColumn(key))?;
        }
        let [order_code, equipment, purchase_order, service_description, quantity] = positions;
        Ok(OrderColumns {
            order_code,
            equipment,
            purchase_order,
            service_description,
            quantity,
        })
    }
}

/// Positions of the order fields within a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderColumns {
    /// Order code position.
    pub order_code: usize,
    /// Equipment position.
    pub equipment: usize,
    /// Purchase order position.
    pub purchase_order: usize,
    /// Service description position.
    pub service_description: usize,
    /// Quantity position.
    pub quantity: usize,
}
