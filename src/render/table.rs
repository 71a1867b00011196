//! Table cells for display.

use crate::record::{Field, Record};

/// Text shown in place of an empty field.
pub const PLACEHOLDER: &str = "-";

/// One rendered table row, in [`Field::ALL`] order.
pub type DisplayRow = [String; Field::COUNT];

/// Cell text for every field, substituting [`PLACEHOLDER`] for empty values.
pub fn display_cells(record: &Record) -> [&str; Field::COUNT] {
    Field::ALL.map(|field| display_value(record.get(field)))
}

/// Owned version of [`display_cells`].
pub fn display_row(record: &Record) -> DisplayRow {
    display_cells(record).map(str::to_owned)
}

pub fn display_value(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Column titles in display order.
pub fn headers() -> [&'static str; Field::COUNT] {
    Field::ALL.map(Field::header)
}
