//! Render coordination.
//!
//! Provides the state machine that mediates between input actions, filter passes, and view
//! updates. Each query edit runs exactly one filter pass over the record set; scrolling only
//! moves the viewport within the existing view.

use crate::error::Result;
use crate::filter::{MatchPositions, Query, RecordFilter};
use crate::input::{InputAction, ScrollDirection};
use crate::record::{Field, Record};
use crate::render::highlight::match_ranges;
use crate::render::table;
use crate::render::ui::{ViewState, VisibleRow};

/// Tracks render-related state that must persist across input actions.
#[derive(Debug)]
pub struct RenderLoopState {
    filter: RecordFilter,
    query: Query,
    matches: MatchPositions,
}

impl RenderLoopState {
    pub fn new(filter: RecordFilter) -> Self {
        let matches = filter.matching_positions("");
        Self {
            filter,
            query: Query::default(),
            matches,
        }
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    /// The normalized query behind the current view.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Record positions of the current view.
    pub fn matches(&self) -> &MatchPositions {
        &self.matches
    }

    /// Replace the query text, run one filter pass, and show the first page of the new view.
    pub fn apply_query(&mut self, text: &str, view_state: &mut ViewState) {
        view_state.query = text.to_string();
        self.query = Query::new(text);
        self.matches = self.filter.matching_positions(self.query.clone());

        view_state.set_counts(
            self.matches.positions.len(),
            self.matches.total_matches,
            self.filter.total_loaded(),
        );
        self.refresh_viewport(view_state);
    }

    /// Apply one input action. Returns `false` when the application should exit.
    pub fn process_action(&mut self, action: InputAction, view_state: &mut ViewState) -> Result<bool> {
        match action {
            InputAction::Quit => return Ok(false),
            InputAction::Scroll { direction, rows } => {
                let rows = rows as isize;
                match direction {
                    ScrollDirection::Up => view_state.scroll_by(-rows),
                    ScrollDirection::Down => view_state.scroll_by(rows),
                }
            }
            InputAction::PageUp => {
                view_state.scroll_by(-(view_state.rows_per_page() as isize));
            }
            InputAction::PageDown => {
                view_state.scroll_by(view_state.rows_per_page() as isize);
            }
            InputAction::GoToStart => view_state.scroll_to(0),
            InputAction::GoToEnd => view_state.scroll_to(view_state.max_top()),
            InputAction::FocusQuery => {
                view_state.query_focused = true;
                view_state.status_line.clear_message();
                return Ok(true);
            }
            InputAction::LeaveQuery => {
                view_state.query_focused = false;
                return Ok(true);
            }
            InputAction::UpdateQuery(text) => {
                view_state.status_line.clear_message();
                self.apply_query(&text, view_state);
                return Ok(true);
            }
            InputAction::ClearQuery => {
                self.apply_query("", view_state);
                view_state.status_line.set_message("Query cleared".to_string());
                return Ok(true);
            }
            InputAction::Resize { width, height } => {
                if !view_state.update_terminal_size(width, height) {
                    return Ok(true);
                }
            }
            InputAction::NoAction | InputAction::InvalidInput => return Ok(true),
        }

        self.refresh_viewport(view_state);
        Ok(true)
    }

    /// Rebuild the visible rows for the current viewport position.
    pub fn refresh_viewport(&self, view_state: &mut ViewState) {
        let positions = &self.matches.positions;
        let end = view_state
            .viewport_top
            .saturating_add(view_state.rows_per_page())
            .min(positions.len());
        let start = view_state.viewport_top.min(end);

        view_state.visible_rows = positions[start..end]
            .iter()
            .filter_map(|&idx| self.filter.records().get(idx))
            .map(|record| self.visible_row(record))
            .collect();
    }

    fn visible_row(&self, record: &Record) -> VisibleRow {
        VisibleRow {
            cells: table::display_row(record),
            highlights: Field::ALL.map(|field| match_ranges(record.get(field), &self.query)),
            empty: Field::ALL.map(|field| record.get(field).is_empty()),
        }
    }
}
