//! Comma-split CSV reading.
//!
//! Sources are plain comma-separated text: the first line names the fields,
//! every later line is one record. Quoting is not supported, so a comma
//! inside a value shifts the remaining columns. Short rows are padded with
//! empty strings and surplus cells are dropped.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use unitplan_model::RawRow;

use crate::error::{IngestError, Result};

/// Header row plus one map per data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRows {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl CsvRows {
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Parse CSV text already held in memory.
pub fn parse_csv_text(text: &str) -> std::result::Result<CsvRows, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("").trim().to_string();
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }
    Ok(CsvRows { headers, rows })
}

/// Read and parse a CSV file.
pub fn read_csv_rows(path: &Path) -> Result<CsvRows> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    parse_csv_text(&text).map_err(|e| IngestError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
