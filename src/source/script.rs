//! Generated JavaScript bundles.
//!
//! A bundle is the file the static site ships:
//!
//! ```text
//! // Auto-generated. Do not edit manually.
//! window.COLLECTION_DATA = [...];
//! window.COLLECTION_META = {"generatedAt":...,"recordCount":...};
//! ```

use crate::error::{CollviewError, Result};
use crate::record::RawRecord;
use crate::source::format::BUNDLE_MARKER;
use crate::source::json::records_from_value;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// First line of every generated bundle.
pub const BUNDLE_HEADER: &str = "// Auto-generated. Do not edit manually.";

/// Metadata written next to the record array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleMeta {
    /// Modification time of the source CSV in nanoseconds since the Unix epoch.
    pub generated_at: u64,
    pub record_count: usize,
}

/// Extract the record array assigned to `COLLECTION_DATA`.
///
/// A bundle that never assigns a usable value (no marker, no `=`, or something that is not
/// JSON such as `undefined`) yields no rows, the same as a page whose data script left
/// `COLLECTION_DATA` unset.
pub fn parse_bundle(content: &str, path: &Path) -> Result<Vec<RawRecord>> {
    let Some(marker) = content.find(BUNDLE_MARKER) else {
        log::warn!("{}: no {} assignment found", path.display(), BUNDLE_MARKER);
        return Ok(Vec::new());
    };

    let after_marker = content[marker + BUNDLE_MARKER.len()..].trim_start();
    let Some(rhs) = after_marker.strip_prefix('=') else {
        log::warn!("{}: {} is never assigned", path.display(), BUNDLE_MARKER);
        return Ok(Vec::new());
    };

    // Only the first value is read; the trailing `;` and META line are left alone.
    match serde_json::Deserializer::from_str(rhs).into_iter::<Value>().next() {
        Some(Ok(value)) => records_from_value(value, path),
        Some(Err(e)) => {
            log::warn!("{}: {} is not a JSON value: {}", path.display(), BUNDLE_MARKER, e);
            Ok(Vec::new())
        }
        None => {
            log::warn!("{}: {} has no value", path.display(), BUNDLE_MARKER);
            Ok(Vec::new())
        }
    }
}

/// Render a bundle for the given rows.
pub fn render_bundle(rows: &[RawRecord], meta: &BundleMeta) -> Result<String> {
    let payload = serde_json::to_string(rows)
        .map_err(|e| CollviewError::other(format!("failed to encode records: {}", e)))?;
    let meta_json = serde_json::to_string(meta)
        .map_err(|e| CollviewError::other(format!("failed to encode metadata: {}", e)))?;

    Ok(format!(
        "{}\nwindow.{} = {};\nwindow.COLLECTION_META = {};\n",
        BUNDLE_HEADER, BUNDLE_MARKER, payload, meta_json
    ))
}
