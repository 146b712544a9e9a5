//! Loosely-typed sheet contents as read from a workbook.

/// A single spreadsheet cell.
///
/// Only `Empty` and `Error` count as missing values. Text is kept as written,
/// including text made of spaces.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value.
    Empty,
    /// Text content.
    Text(String),
    /// Integer content.
    Int(i64),
    /// Floating-point content.
    Float(f64),
    /// Boolean content.
    Bool(bool),
    /// Date or time, rendered as text by the reader.
    DateTime(String),
    /// Formula error such as `#N/A`.
    Error(String),
}

impl CellValue {
    /// Returns `true` when the cell holds no usable value.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Empty | Self::Error(_) => true,
            Self::Text(_) | Self::Int(_) | Self::Float(_) | Self::Bool(_) | Self::DateTime(_) => {
                false
            }
        }
    }

    /// Renders the cell as text, or `None` when it is missing.
    ///
    /// Whole floats render without a fractional part, so an order number
    /// stored as `12345.0` becomes `"12345"`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        match self {
            Self::Text(text) | Self::DateTime(text) => Some(text.clone()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Bool(value) => Some(value.to_string()),
            Self::Empty | Self::Error(_) => None,
        }
    }

    /// Reads the cell as a whole number.
    ///
    /// # Errors
    ///
    /// Returns the cell rendered as text when it holds something other than
    /// a whole number that fits in an `i32`.
    pub fn as_whole_number(&self) -> Result<Option<i32>, String> {
        if self.is_missing() {
            return Ok(None);
        }
        let rendered = self.as_text().unwrap_or_default();
        match self {
            Self::Int(value) => i32::try_from(*value).map(Some).map_err(|_| rendered),
            // `f64` display drops a zero fraction, so whole floats parse.
            Self::Float(_) | Self::Text(_) => rendered
                .trim()
                .parse::<i32>()
                .map(Some)
                .map_err(|_| rendered),
            Self::Bool(_) | Self::DateTime(_) | Self::Empty | Self::Error(_) => Err(rendered),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The first sheet of a workbook: a header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    headers: Vec<CellValue>,
    rows: Vec<Vec<CellValue>>,
}

impl RawSheet {
    /// Creates a sheet from its header row and data rows.
    #[must_use]
    pub const fn new(headers: Vec<CellValue>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a sheet from row-major cells, taking the first row as header.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<CellValue>>) -> Self {
        let mut iter = rows.into_iter();
        let headers = iter.next().unwrap_or_default();
        Self::new(headers, iter.collect())
    }

    /// Returns the raw header cells.
    #[must_use]
    pub fn headers(&self) -> &[CellValue] {
        &self.headers
    }

    /// Returns the data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Drops data rows in which every cell is missing.
    #[must_use]
    pub fn without_blank_rows(mut self) -> Self {
        self.rows.retain(|row| !row.iter().all(CellValue::is_missing));
        self
    }
}
