//! Data source format detection.
//!
//! The extension decides when it is recognized; otherwise the first bytes of the
//! content are sniffed.

use std::path::Path;

/// How many leading bytes are inspected when sniffing content.
const SNIFF_LEN: usize = 4096;

/// Marker of a generated JavaScript bundle.
pub const BUNDLE_MARKER: &str = "COLLECTION_DATA";

/// Supported record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// A JSON array of record objects.
    Json,
    /// A generated script assigning the record array to `window.COLLECTION_DATA`.
    Bundle,
    /// Comma separated values with a header row.
    Csv,
}

impl SourceFormat {
    /// Detect a format from the file extension alone.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "js" => Some(SourceFormat::Bundle),
            "csv" => Some(SourceFormat::Csv),
            _ => None,
        }
    }

    /// Detect a format from file content.
    pub fn sniff(content: &[u8]) -> Self {
        let head = &content[..content.len().min(SNIFF_LEN)];
        let text = String::from_utf8_lossy(head);
        let trimmed = text.trim_start_matches('\u{feff}').trim_start();

        if trimmed.starts_with('[') {
            SourceFormat::Json
        } else if trimmed.contains(BUNDLE_MARKER) {
            SourceFormat::Bundle
        } else {
            SourceFormat::Csv
        }
    }

    /// Extension first, then content.
    pub fn detect(path: &Path, content: &[u8]) -> Self {
        Self::from_extension(path).unwrap_or_else(|| Self::sniff(content))
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Bundle => "bundle",
            SourceFormat::Csv => "csv",
        }
    }
}
