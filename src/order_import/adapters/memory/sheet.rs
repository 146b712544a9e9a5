//! In-memory sheet source.

use camino::Utf8PathBuf;

use crate::order_import::{
    domain::RawSheet,
    ports::{SheetError, SheetResult, SheetSource},
};

/// Serves a prepared sheet, or reports a missing workbook.
#[derive(Debug, Clone)]
pub struct InMemorySheetSource {
    sheet: Option<RawSheet>,
    path: Utf8PathBuf,
}

impl InMemorySheetSource {
    /// Creates a source that returns `sheet`.
    #[must_use]
    pub fn new(sheet: RawSheet) -> Self {
        Self {
            sheet: Some(sheet),
            path: Utf8PathBuf::from("memory.xlsx"),
        }
    }

    /// Creates a source whose workbook does not exist at `path`.
    #[must_use]
    pub fn missing(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            sheet: None,
            path: path.into(),
        }
    }
}

impl SheetSource for InMemorySheetSource {
    fn read_first_sheet(&self) -> SheetResult<RawSheet> {
        self.sheet
            .clone()
            .ok_or_else(|| SheetError::NotFound(self.path.clone()))
    }
}
