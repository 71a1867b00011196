//! UI state management structures
//!
//! `ViewState` holds only what the terminal needs to draw: the query text, the rows of
//! the current view that fit on screen, the view counts, and the status line. The record
//! set and the full list of matches live in the render loop.

use crate::record::Field;
use crate::render::table::DisplayRow;
use crate::status::{self, LoadStatus};
use std::path::{Path, PathBuf};

/// Rows taken by the search box (border, text, border).
pub const SEARCH_BOX_HEIGHT: u16 = 3;
/// Rows taken below the search box that are not data rows: table header, meta, status.
pub const CHROME_ROWS: u16 = 3;

/// Byte ranges to highlight within one cell.
pub type CellHighlights = Vec<(usize, usize)>;

/// A visible table row with per-cell highlight ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleRow {
    pub cells: DisplayRow,
    /// Ranges index into `cells`; placeholder cells never carry highlights.
    pub highlights: [CellHighlights; Field::COUNT],
    /// Which cells had no value and are drawn as the placeholder.
    pub empty: [bool; Field::COUNT],
}

/// Viewport state for rendering - focused only on what's currently visible
#[derive(Debug)]
pub struct ViewState {
    /// Data file the records came from
    pub source_path: PathBuf,

    /// Current search box text, as typed
    pub query: String,

    /// Whether keystrokes currently edit the search box
    pub query_focused: bool,

    /// Rows currently visible in the table
    pub visible_rows: Vec<VisibleRow>,

    /// Position within the view of the first visible row
    pub viewport_top: usize,

    /// Rows in the current view (at most the view limit)
    pub shown: usize,

    /// Matches before truncation
    pub total_matches: usize,

    /// Records in the record set
    pub total_loaded: usize,

    /// Status line content
    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    pub fn new(source_path: impl AsRef<Path>, viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            query: String::new(),
            query_focused: false,
            visible_rows: Vec::new(),
            viewport_top: 0,
            shown: 0,
            total_matches: 0,
            total_loaded: 0,
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
        }
    }

    /// Get the filename for display
    pub fn filename(&self) -> String {
        self.source_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>")
            .to_string()
    }

    /// Data rows that fit in the table area
    pub fn rows_per_page(&self) -> usize {
        self.viewport_height
            .saturating_sub(SEARCH_BOX_HEIGHT + CHROME_ROWS)
            .max(1) as usize
    }

    /// Largest valid `viewport_top` for the current view
    pub fn max_top(&self) -> usize {
        self.shown.saturating_sub(self.rows_per_page())
    }

    /// Move the viewport to a row, clamped to the view
    pub fn scroll_to(&mut self, top: usize) {
        self.viewport_top = top.min(self.max_top());
    }

    /// Move the viewport by a signed number of rows
    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.viewport_top.saturating_sub(delta.unsigned_abs())
        } else {
            self.viewport_top.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    /// Record the counts of a fresh filter pass and return to the first row
    pub fn set_counts(&mut self, shown: usize, total_matches: usize, total_loaded: usize) {
        self.shown = shown;
        self.total_matches = total_matches;
        self.total_loaded = total_loaded;
        self.status_line.load_notice = LoadStatus::from_total(total_loaded).message();
        self.viewport_top = 0;
    }

    /// Update terminal dimensions. Returns true if dimensions actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;

        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
            self.visible_rows.clear();
            self.scroll_to(self.viewport_top);
        }

        changed
    }

    /// Meta line for the current view
    pub fn format_meta_line(&self) -> String {
        status::summary(self.shown, self.total_matches, self.total_loaded)
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line.format_status_line(
            &self.filename(),
            self.viewport_top,
            self.visible_rows.len(),
            self.shown,
        )
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Transient message (errors, notices about the last action)
    pub message: Option<String>,
    /// Persistent notice derived from the load status
    pub load_notice: Option<&'static str>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Format the status line for display
    pub fn format_status_line(
        &self,
        filename: &str,
        top: usize,
        visible: usize,
        shown: usize,
    ) -> String {
        let position = if shown == 0 {
            "Empty".to_string()
        } else {
            let last = (top + visible).min(shown);
            format!("rows {}-{}", top + 1, last)
        };

        let mut parts = vec![filename.to_string(), position];
        if let Some(notice) = self.load_notice {
            parts.push(notice.to_string());
        }
        if let Some(ref message) = self.message {
            parts.push(message.clone());
        }
        parts.join(" | ")
    }
}
