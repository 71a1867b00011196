//! Query match ranges inside individual cells.
//!
//! The filter matches against the lowercased search blob, so a cell is highlighted where
//! its lowercased text contains the needle. Lowercasing can change byte lengths for some
//! characters, so offsets are mapped back to the original text char by char.

use crate::filter::Query;
use memchr::memmem;

/// Byte ranges `(start, end)` in `cell` where the query occurs, case-insensitively.
///
/// Ranges are non-overlapping, ascending, and fall on char boundaries of `cell`.
pub fn match_ranges(cell: &str, query: &Query) -> Vec<(usize, usize)> {
    let needle = query.needle();
    if needle.is_empty() || cell.is_empty() {
        return Vec::new();
    }

    // folded_starts[i] is the original offset of the char that produced folded byte i.
    let mut folded = String::with_capacity(cell.len());
    let mut folded_starts = Vec::with_capacity(cell.len() + 1);
    for (offset, ch) in cell.char_indices() {
        let before = folded.len();
        folded.extend(ch.to_lowercase());
        folded_starts.extend(std::iter::repeat(offset).take(folded.len() - before));
    }
    folded_starts.push(cell.len());

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for start in memmem::find_iter(folded.as_bytes(), needle.as_bytes()) {
        let end = start + needle.len();
        let orig_start = folded_starts[start];
        let orig_end = original_end(cell, &folded_starts, end);

        if ranges.last().map_or(true, |&(_, prev_end)| orig_start >= prev_end) {
            ranges.push((orig_start, orig_end));
        }
    }
    ranges
}

/// Original offset just past the char that produced folded byte `end - 1`.
fn original_end(cell: &str, folded_starts: &[usize], end: usize) -> usize {
    let last_char_start = folded_starts[end - 1];
    cell[last_char_start..]
        .chars()
        .next()
        .map_or(cell.len(), |ch| last_char_start + ch.len_utf8())
}
