//! Status and summary strings shown alongside the record table.

use crate::filter::MAX_ROWS;

/// Message shown when no records were loaded.
pub const NO_DATA_MESSAGE: &str =
    "No data loaded. Generate data/collection-data.js from the local CSV before publishing.";

/// Whether any records were loaded at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Empty,
    Loaded(usize),
}

impl LoadStatus {
    pub fn from_total(total_loaded: usize) -> Self {
        if total_loaded == 0 {
            LoadStatus::Empty
        } else {
            LoadStatus::Loaded(total_loaded)
        }
    }

    /// Status line text; `None` when data is present.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoadStatus::Empty => Some(NO_DATA_MESSAGE),
            LoadStatus::Loaded(_) => None,
        }
    }
}

/// Meta line describing the current view.
pub fn summary(shown: usize, total_matches: usize, total_loaded: usize) -> String {
    format!(
        "Showing {} of {} records (limit {}). Total loaded: {}.",
        shown, total_matches, MAX_ROWS, total_loaded
    )
}
