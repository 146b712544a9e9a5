//! Source port for the spreadsheet being imported.

use crate::order_import::domain::RawSheet;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sheet source operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Supplies the first sheet of the workbook being imported.
#[cfg_attr(test, mockall::automock)]
pub trait SheetSource {
    /// Reads the whole first sheet into memory.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::NotFound`] when the workbook does not exist and
    /// other [`SheetError`] variants when it cannot be decoded.
    fn read_first_sheet(&self) -> SheetResult<RawSheet>;
}

/// Errors returned by sheet sources.
#[derive(Debug, Clone, Error)]
pub enum SheetError {
    /// The workbook does not exist.
    #[error("spreadsheet not found at '{0}'")]
    NotFound(Utf8PathBuf),

    /// The workbook exists but could not be read.
    #[error("failed to read spreadsheet '{path}': {source}")]
    Io {
        /// Workbook location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The workbook could not be decoded.
    #[error("failed to decode spreadsheet: {0}")]
    Workbook(String),

    /// The workbook contains no worksheet.
    #[error("spreadsheet has no worksheets")]
    NoSheets,
}

impl SheetError {
    /// Classifies an I/O failure for the workbook at `path`.
    #[must_use]
    pub fn io(path: Utf8PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io {
                path,
                source: Arc::new(err),
            }
        }
    }

    /// Wraps a decoder failure.
    #[must_use]
    pub fn workbook(message: impl Into<String>) -> Self {
        Self::Workbook(message.into())
    }
}
