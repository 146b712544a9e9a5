//! Error types for turning sheet rows into order records.

use thiserror::Error;

/// Errors returned while mapping sheet rows onto order records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    /// A required column is absent after header normalization.
    #[error("column '{0}' was not found in the spreadsheet header")]
    MissingColumn(&'static str),

    /// A quantity cell does not hold a whole number.
    #[error("row {row}: quantity '{value}' is not a whole number")]
    InvalidQuantity {
        /// 1-based position of the row in the cleaned dataset.
        row: usize,
        /// The cell as it appeared in the sheet.
        value: String,
    },

    /// The dataset has more rows than a priority can number.
    #[error("cannot assign a priority to {0} rows")]
    PriorityOverflow(usize),
}
