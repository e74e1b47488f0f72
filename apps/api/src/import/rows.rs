//! Delimited-text decoding and upload format detection.

use std::collections::BTreeMap;

use csv::{ReaderBuilder, Trim};
use serde::Serialize;

use crate::import::ImportError;

/// One decoded data row, keyed by header.
pub type Row = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportFormat {
    DelimitedText,
    Spreadsheet,
    Pdf,
    Unknown,
}

impl ImportFormat {
    /// Detects the format from the uploaded file's extension.
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" | "txt" => ImportFormat::DelimitedText,
            "xlsx" | "xls" => ImportFormat::Spreadsheet,
            "pdf" => ImportFormat::Pdf,
            _ => ImportFormat::Unknown,
        }
    }

    /// Only delimited text is decoded; everything else is rejected with guidance.
    pub fn ensure_supported(self) -> Result<(), ImportError> {
        match self {
            ImportFormat::DelimitedText => Ok(()),
            ImportFormat::Spreadsheet => Err(ImportError::Unsupported(
                "Excel files cannot be parsed here. Please upload a CSV file instead.".to_string(),
            )),
            ImportFormat::Pdf => Err(ImportError::Unsupported(
                "PDF files cannot be parsed here. Please upload a CSV file instead.".to_string(),
            )),
            ImportFormat::Unknown => Err(ImportError::Unsupported(
                "Unrecognised file type. Please upload a CSV file.".to_string(),
            )),
        }
    }
}

/// Decodes delimited text with a header row into row maps.
///
/// Blank and whitespace-only lines are skipped and values trimmed. A row
/// with more fields than headers has the overflow joined back onto the last
/// column with `,`, so an unquoted `name:level` list in the final column
/// survives intact. A JSON skills cell must be quoted: unquoted, the CSV
/// reader strips its inner quotes.
pub fn read_rows(text: &str) -> Result<Vec<Row>, ImportError> {
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::Malformed(format!("unreadable header row: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(ImportError::Empty);
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| ImportError::Malformed(format!("row {}: {e}", line + 1)))?;
        // Whitespace-only line. Rows of empty fields (`,,`) are kept.
        if record.len() <= 1 && record.iter().all(str::is_empty) {
            continue;
        }

        let mut row = Row::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = if idx + 1 == headers.len() && record.len() > headers.len() {
                record
                    .iter()
                    .skip(idx)
                    .collect::<Vec<_>>()
                    .join(",")
            } else {
                record.get(idx).unwrap_or("").to_string()
            };
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(rows)
}

/// Field value, or `None` when missing or blank.
pub fn field<'a>(row: &'a Row, key: &str) -> Option<&'a str> {
    row.get(key).map(String::as_str).filter(|v| !v.is_empty())
}
