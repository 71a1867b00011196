//! Record data sources.
//!
//! Loads raw rows from JSON arrays, generated JavaScript bundles, or CSV exports, and
//! builds bundles from CSV. The loaders only produce [`RawRecord`]s; normalization into
//! a [`RecordSet`] happens afterwards.

pub mod delimited;
pub mod format;
pub mod json;
pub mod script;
pub mod validation;

pub use format::SourceFormat;
pub use script::BundleMeta;

use crate::collection::RecordSet;
use crate::error::{CollviewError, Result};
use crate::record::RawRecord;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Default CSV export read by the bundle builder.
pub const DEFAULT_CSV_PATH: &str = "data/colecao.csv";

/// Default bundle written by the builder and read by the viewer.
pub const DEFAULT_BUNDLE_PATH: &str = "data/collection-data.js";

/// Read every raw row from a data file.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    validation::validate_data_path(path)?;

    let content = std::fs::read(path)
        .map_err(|e| CollviewError::file_error(format!("Failed to read {}", path.display()), e))?;
    let format = SourceFormat::detect(path, &content);
    log::debug!(
        "loading {} ({} bytes) as {}",
        path.display(),
        content.len(),
        format.name()
    );

    match format {
        SourceFormat::Csv => delimited::parse_csv_records(&content, path),
        SourceFormat::Json | SourceFormat::Bundle => {
            let text = std::str::from_utf8(&content)
                .map_err(|e| CollviewError::data_format(path, e.to_string()))?;
            if format == SourceFormat::Json {
                json::parse_json_records(text, path)
            } else {
                script::parse_bundle(text, path)
            }
        }
    }
}

/// Load a record set, treating a missing data file as an empty one.
///
/// An absent file means the data has not been generated yet, which is reported through
/// the load status instead of failing. Unreadable or malformed files are still errors.
pub fn load_or_empty(path: &Path) -> Result<RecordSet> {
    match load_records(path) {
        Ok(rows) => {
            let records = RecordSet::from_raw(rows);
            log::info!("loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        Err(CollviewError::FileNotFound { path }) => {
            log::warn!("data file {} not found; no records loaded", path.display());
            Ok(RecordSet::empty())
        }
        Err(err) => Err(err),
    }
}

/// Outcome of a bundle build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub record_count: usize,
}

/// Generate a JavaScript bundle from a CSV export.
///
/// The bundle's `generatedAt` is the CSV's modification time in nanoseconds. Parent
/// directories of `out` are created as needed.
pub fn build_bundle(csv_path: &Path, out: &Path) -> Result<BuildReport> {
    validation::validate_data_path(csv_path)?;

    let content = std::fs::read(csv_path).map_err(|e| {
        CollviewError::file_error(format!("Failed to read {}", csv_path.display()), e)
    })?;
    let rows = delimited::parse_csv_records(&content, csv_path)?;

    let meta = BundleMeta {
        generated_at: modified_nanos(csv_path)?,
        record_count: rows.len(),
    };
    let bundle = script::render_bundle(&rows, &meta)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CollviewError::file_error(format!("Failed to create {}", parent.display()), e)
        })?;
    }
    std::fs::write(out, bundle)
        .map_err(|e| CollviewError::file_error(format!("Failed to write {}", out.display()), e))?;

    log::info!("wrote {} records to {}", rows.len(), out.display());
    Ok(BuildReport {
        output: out.to_path_buf(),
        record_count: rows.len(),
    })
}

fn modified_nanos(path: &Path) -> Result<u64> {
    let modified = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| CollviewError::file_error("Failed to read modification time", e))?;
    let nanos = modified
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or(0);
    Ok(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;
    use tempfile::TempDir;

    #[test]
    fn test_load_records_by_extension() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("records.json");
        std::fs::write(&json, r#"[{"genus":"Puma"}]"#).unwrap();
        let csv = dir.path().join("records.csv");
        std::fs::write(&csv, "genus\nLeopardus\n").unwrap();

        assert_eq!(load_records(&json).unwrap()[0].genus, "Puma");
        assert_eq!(load_records(&csv).unwrap()[0].genus, "Leopardus");
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let dir = TempDir::new().unwrap();
        let records = load_or_empty(&dir.path().join("collection-data.js")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_or_empty_propagates_malformed_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();
        assert!(matches!(
            load_or_empty(&path),
            Err(CollviewError::DataFormat { .. })
        ));
    }

    #[test]
    fn test_build_bundle_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("colecao.csv");
        std::fs::write(
            &csv,
            "catalogNumber,scientificName,specificEpithet\nIBS001,,leo\n",
        )
        .unwrap();
        let out = dir.path().join("site/data/collection-data.js");

        let report = build_bundle(&csv, &out).unwrap();
        assert_eq!(report.record_count, 1);
        assert_eq!(report.output, out);

        let records = load_or_empty(&out).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(0).unwrap().get(Field::ScientificName), "leo");
    }

    #[test]
    fn test_build_bundle_missing_csv() {
        let dir = TempDir::new().unwrap();
        let err = build_bundle(
            &dir.path().join("colecao.csv"),
            &dir.path().join("out.js"),
        )
        .unwrap_err();
        assert!(matches!(err, CollviewError::FileNotFound { .. }));
        assert!(!dir.path().join("out.js").exists());
    }
}
