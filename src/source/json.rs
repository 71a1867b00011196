//! JSON record arrays.

use crate::error::{CollviewError, Result};
use crate::record::RawRecord;
use serde_json::Value;
use std::path::Path;

/// Parse a JSON document holding an array of record objects.
pub fn parse_json_records(content: &str, path: &Path) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(content.trim_start_matches('\u{feff}'))
        .map_err(|e| CollviewError::data_format(path, e.to_string()))?;
    records_from_value(value, path)
}

/// Convert an already parsed JSON value into raw rows.
///
/// A value that is not an array yields no rows. Array elements that are not objects
/// become rows with every column empty.
pub fn records_from_value(value: Value, path: &Path) -> Result<Vec<RawRecord>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            log::warn!(
                "{}: expected an array of records, found {}; treating as empty",
                path.display(),
                value_kind(&other)
            );
            return Ok(Vec::new());
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(_) => serde_json::from_value(item).map_err(|e| {
                CollviewError::data_format(path, format!("record {}: {}", idx, e))
            }),
            _ => Ok(RawRecord::default()),
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("records.json")
    }

    #[test]
    fn test_parse_array_of_objects() {
        let rows = parse_json_records(
            r#"[{"catalogNumber":"IBS001","genus":"Panthera"},{"order":"Rodentia"}]"#,
            &path(),
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].genus, "Panthera");
        assert_eq!(rows[1].order, "Rodentia");
        assert_eq!(rows[1].catalog_number, "");
    }

    #[test]
    fn test_non_array_is_empty() {
        let rows = parse_json_records(r#"{"catalogNumber":"IBS001"}"#, &path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_non_object_elements_become_blank_rows() {
        let rows = parse_json_records(r#"[1, null, {"genus":"Puma"}]"#, &path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], RawRecord::default());
        assert_eq!(rows[2].genus, "Puma");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = parse_json_records("[{\"genus\":", &path()).unwrap_err();
        assert!(matches!(err, CollviewError::DataFormat { .. }));
    }

    #[test]
    fn test_nested_value_keeps_the_row() {
        let rows = parse_json_records(
            r#"[{"genus":"Puma"},{"genus":"Leo","locality":{"x":1}},{"genus":"Panthera"}]"#,
            &path(),
        )
        .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].genus, "Leo");
        assert_eq!(rows[1].locality, r#"{"x":1}"#);
        assert_eq!(rows[2].genus, "Panthera");
    }
}
