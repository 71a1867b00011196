//! CSV record files.
//!
//! Columns are looked up by header name, the way the site's data build step reads the
//! local spreadsheet export. Missing columns and short rows yield empty values, and cell
//! text is kept verbatim.

use crate::error::{CollviewError, Result};
use crate::record::{RawRecord, SOURCE_COLUMNS};
use std::path::Path;

/// Parse CSV content with a header row into raw rows.
pub fn parse_csv_records(content: &[u8], path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let headers = reader
        .headers()
        .map_err(|e| CollviewError::data_format(path, e.to_string()))?
        .clone();

    let columns: Vec<(&'static str, usize)> = SOURCE_COLUMNS
        .iter()
        .filter_map(|&name| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}') == name)
                .map(|idx| (name, idx))
        })
        .collect();

    if columns.is_empty() && !headers.is_empty() {
        log::warn!(
            "{}: none of the known record columns were found in the header",
            path.display()
        );
    }

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            CollviewError::data_format(path, format!("row {}: {}", line + 1, e))
        })?;

        let mut row = RawRecord::default();
        for &(name, idx) in &columns {
            if let Some(value) = record.get(idx) {
                row.set(name, value);
            }
        }
        rows.push(row);
    }

    log::debug!("{}: read {} csv rows", path.display(), rows.len());
    Ok(rows)
}
