//! Reading import rows from spreadsheet CSV exports.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use barq_core::util::text::normalize_header;
use barq_core::Result;
use serde::{Deserialize, Serialize};

use crate::row::ImportRow;

/// CSV reader settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter. Spreadsheets in French locales export `;`.
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,

    /// Trim and collapse whitespace in headers before matching synonyms.
    #[serde(default = "default_true")]
    pub normalize_headers: bool,
}

fn default_delimiter() -> u8 {
    b','
}

fn default_true() -> bool {
    true
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            normalize_headers: default_true(),
        }
    }
}

/// Read every data row of a CSV document.
///
/// The first record is the header row; its cells become the row keys.
/// Short rows are tolerated (missing trailing cells are simply absent).
///
/// # Errors
///
/// Returns [`Error::Csv`](barq_core::Error::Csv) if the document cannot be
/// decoded (invalid UTF-8, unreadable source).
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> Result<Vec<ImportRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| {
            if options.normalize_headers {
                normalize_header(h)
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let pairs = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), value.to_string()));
        rows.push(ImportRow::from_pairs(pairs));
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "Read CSV import");
    Ok(rows)
}

/// Read a CSV file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`](barq_core::Error::Io) if the file cannot be opened,
/// or [`Error::Csv`](barq_core::Error::Csv) if it cannot be decoded.
pub fn read_csv_path(path: &Path, options: &CsvOptions) -> Result<Vec<ImportRow>> {
    let file = File::open(path)?;
    read_csv(file, options)
}
