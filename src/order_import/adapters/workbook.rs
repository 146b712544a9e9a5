//! Workbook-backed sheet source.
//!
//! Reads `.xlsx`, `.xlsm`, `.xls` and `.ods` files with `calamine`. The file
//! is loaded through a capability handle on its parent directory and decoded
//! from memory.

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto_from_rs};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::Cursor;
use tracing::info;

use crate::order_import::{
    domain::{CellValue, RawSheet},
    ports::{SheetError, SheetResult, SheetSource},
};

/// Reads the first worksheet of a workbook on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookSheetSource {
    path: Utf8PathBuf,
}

impl WorkbookSheetSource {
    /// Creates a source for the workbook at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_bytes(&self) -> SheetResult<Vec<u8>> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SheetError::NotFound(self.path.clone()))?;
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| SheetError::io(self.path.clone(), err))?;
        dir.read(file_name)
            .map_err(|err| SheetError::io(self.path.clone(), err))
    }
}

impl SheetSource for WorkbookSheetSource {
    fn read_first_sheet(&self) -> SheetResult<RawSheet> {
        info!(path = %self.path, "reading spreadsheet");
        let bytes = self.read_bytes()?;
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|err| SheetError::workbook(err.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SheetError::NoSheets)?
            .map_err(|err| SheetError::workbook(err.to_string()))?;

        Ok(RawSheet::from_rows(
            range
                .rows()
                .map(|row| row.iter().map(cell_value).collect::<Vec<_>>()),
        ))
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => CellValue::DateTime(render_datetime(value)),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::DateTime(text.clone()),
        Data::Error(err) => CellValue::Error(err.to_string()),
    }
}

/// Renders a date cell the way it reads in the sheet, `2025-02-10 00:00:00`.
///
/// Durations and serials outside the calendar keep the raw serial.
fn render_datetime(value: &ExcelDateTime) -> String {
    value
        .is_datetime()
        .then(|| value.as_datetime())
        .flatten()
        .map_or_else(
            || value.to_string(),
            |datetime| datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}
