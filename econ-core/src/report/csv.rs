//! CSV serialization of report rows.
//!
//! The layout is fixed byte for byte: cells are quoted only when they
//! contain a comma, a double quote or a line feed, rows are joined by `\n`
//! with no trailing terminator, and the file starts with a UTF-8 BOM so
//! spreadsheet software picks the right encoding.

use std::borrow::Cow;

use super::ReportRow;

/// Name of the downloaded report file.
pub const CSV_FILE_NAME: &str = "unit-economics.csv";

/// MIME type the report is offered with.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

const BOM: char = '\u{FEFF}';

/// Quotes a cell when it contains `,`, `"` or `\n`, doubling inner quotes.
///
/// ```
/// use econ_core::report::escape_cell;
///
/// assert_eq!(escape_cell("원자재비"), "원자재비");
/// assert_eq!(escape_cell("원자재비,특수"), "\"원자재비,특수\"");
/// assert_eq!(escape_cell("He said \"hi\""), "\"He said \"\"hi\"\"\"");
/// ```
pub fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Joins rows into CSV text without the BOM.
pub fn to_csv(rows: &[ReportRow]) -> String {
    rows.iter()
        .map(|row| {
            row.cells()
                .iter()
                .map(|cell| escape_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A report ready to be handed to a download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    /// CSV text including the leading BOM.
    pub contents: String,
}

impl CsvExport {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let csv = to_csv(rows);
        let mut contents = String::with_capacity(csv.len() + BOM.len_utf8());
        contents.push(BOM);
        contents.push_str(&csv);

        Self {
            file_name: CSV_FILE_NAME,
            mime_type: CSV_MIME_TYPE,
            contents,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }
}
