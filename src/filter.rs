//! Record filter: case-insensitive substring matching over the Record Set.
//!
//! A query is trimmed and lowercased, then compared against each record's search blob
//! (all display fields joined by single spaces, lowercased). Matches keep the Record Set
//! order and the returned view is capped at [`MAX_ROWS`]. Filtering is a pure read of
//! the immutable record set, so calling it again with the same query yields the same
//! result.

use crate::collection::RecordSet;
use crate::record::Record;
use crate::status;
use memchr::memmem;

/// Maximum number of records in a view.
pub const MAX_ROWS: usize = 500;

/// A normalized query needle.
///
/// Absent queries are the empty query, which matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    /// The trimmed, lowercased needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&String> for Query {
    fn from(text: &String) -> Self {
        Self::new(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl From<Option<&str>> for Query {
    fn from(text: Option<&str>) -> Self {
        Self::new(text.unwrap_or_default())
    }
}

/// Positions of matching records plus the uncapped match count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPositions {
    /// Indices into the record set, ascending, at most [`MAX_ROWS`] long.
    pub positions: Vec<usize>,
    pub total_matches: usize,
}

/// Output of one filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<'a> {
    /// Matching records in original order, at most [`MAX_ROWS`].
    pub shown: Vec<&'a Record>,
    /// Number of matches before truncation.
    pub total_matches: usize,
    /// Size of the record set.
    pub total_loaded: usize,
}

impl FilterResult<'_> {
    /// Meta line for this view.
    pub fn summary(&self) -> String {
        status::summary(self.shown.len(), self.total_matches, self.total_loaded)
    }
}

/// Filters an immutable record set by free-text queries.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    records: RecordSet,
}

impl RecordFilter {
    pub fn new(records: RecordSet) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn total_loaded(&self) -> usize {
        self.records.len()
    }

    /// Run one filter pass and return the capped view.
    pub fn filter(&self, query: impl Into<Query>) -> FilterResult<'_> {
        let matches = self.matching_positions(query);
        let shown = matches
            .positions
            .iter()
            .filter_map(|&idx| self.records.get(idx))
            .collect();

        FilterResult {
            shown,
            total_matches: matches.total_matches,
            total_loaded: self.records.len(),
        }
    }

    /// Run one filter pass and return record positions instead of references.
    pub fn matching_positions(&self, query: impl Into<Query>) -> MatchPositions {
        let query = query.into();

        if query.is_empty() {
            let total_matches = self.records.len();
            return MatchPositions {
                positions: (0..total_matches.min(MAX_ROWS)).collect(),
                total_matches,
            };
        }

        let finder = memmem::Finder::new(query.needle().as_bytes());
        let mut positions = Vec::new();
        let mut total_matches = 0;

        for (idx, blob) in self.records.blobs().enumerate() {
            if finder.find(blob.as_bytes()).is_some() {
                if total_matches < MAX_ROWS {
                    positions.push(idx);
                }
                total_matches += 1;
            }
        }

        log::trace!(
            "query {:?} matched {} of {} records",
            query.needle(),
            total_matches,
            self.records.len()
        );

        MatchPositions {
            positions,
            total_matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, RawRecord};

    fn row(pairs: &[(&str, &str)]) -> RawRecord {
        let mut raw = RawRecord::default();
        for (key, value) in pairs {
            raw.set(key, *value);
        }
        raw
    }

    fn panthera_filter() -> RecordFilter {
        RecordFilter::new(RecordSet::from_raw(vec![row(&[
            ("catalogNumber", "IBS001"),
            ("genus", "Panthera"),
            ("stateProvince", "Bahia"),
        ])]))
    }

    #[test]
    fn test_query_normalization() {
        assert_eq!(Query::new("  PanThera \t").needle(), "panthera");
        assert!(Query::new("   ").is_empty());
        assert!(Query::from(None).is_empty());
        assert_eq!(Query::from(Some(" Leo ")).needle(), "leo");
    }

    #[test]
    fn test_single_record_match() {
        let filter = panthera_filter();
        let result = filter.filter("panthera");

        assert_eq!(result.shown.len(), 1);
        assert_eq!(result.shown[0].get(Field::CatalogNumber), "IBS001");
        assert_eq!(result.total_matches, 1);
        assert_eq!(result.total_loaded, 1);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let filter = panthera_filter();
        assert_eq!(filter.filter("  BAHIA  ").total_matches, 1);
        assert_eq!(filter.filter("ibs0").total_matches, 1);
        assert_eq!(filter.filter("felis").total_matches, 0);
        assert!(filter.filter("felis").shown.is_empty());
    }

    #[test]
    fn test_match_may_span_field_separator() {
        let filter = RecordFilter::new(RecordSet::from_raw(vec![row(&[
            ("genus", "Puma"),
            ("scientificName", "concolor"),
        ])]));
        assert_eq!(filter.filter("puma concolor").total_matches, 1);
    }

    #[test]
    fn test_absent_query_matches_everything() {
        let filter = panthera_filter();
        let result = filter.filter(None::<&str>);
        assert_eq!(result.total_matches, 1);
        assert_eq!(result.shown.len(), 1);
    }

    #[test]
    fn test_empty_record_set() {
        let filter = RecordFilter::new(RecordSet::empty());
        let result = filter.filter("");
        assert!(result.shown.is_empty());
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.total_loaded, 0);
        assert!(filter.records().load_status().message().is_some());
    }

    #[test]
    fn test_view_is_capped() {
        let rows = (0..600).map(|i| row(&[("catalogNumber", format!("C{i:04}").as_str())]));
        let filter = RecordFilter::new(RecordSet::from_raw(rows));

        let result = filter.filter("");
        assert_eq!(result.shown.len(), MAX_ROWS);
        assert_eq!(result.total_matches, 600);
        assert_eq!(result.total_loaded, 600);
        assert_eq!(result.shown[0].get(Field::CatalogNumber), "C0000");
        assert_eq!(result.shown[499].get(Field::CatalogNumber), "C0499");

        let result = filter.filter("c05");
        assert_eq!(result.total_matches, 100);
        assert_eq!(result.shown.len(), 100);
        assert_eq!(
            result.summary(),
            "Showing 100 of 100 records (limit 500). Total loaded: 600."
        );
    }

    #[test]
    fn test_matching_positions_are_ascending() {
        let rows = vec![
            row(&[("genus", "Puma")]),
            row(&[("genus", "Leopardus")]),
            row(&[("genus", "Puma")]),
        ];
        let filter = RecordFilter::new(RecordSet::from_raw(rows));
        let matches = filter.matching_positions("puma");
        assert_eq!(matches.positions, vec![0, 2]);
        assert_eq!(matches.total_matches, 2);
    }

    #[test]
    fn test_non_ascii_query() {
        let filter = RecordFilter::new(RecordSet::from_raw(vec![row(&[(
            "municipality",
            "São Gonçalo",
        )])]));
        assert_eq!(filter.filter("SÃO GON").total_matches, 1);
        assert_eq!(filter.filter("gonçalo").total_matches, 1);
    }
}
