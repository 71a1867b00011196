//! Plain-text rendering of a filter result for non-interactive output.

use crate::error::Result;
use crate::filter::FilterResult;
use crate::render::table;
use crate::status::LoadStatus;
use std::io::Write;

/// Write the load notice (if any), the meta line, and the view as tab-separated rows.
pub fn write_report<W: Write>(writer: &mut W, result: &FilterResult<'_>) -> Result<()> {
    if let Some(message) = LoadStatus::from_total(result.total_loaded).message() {
        writeln!(writer, "{}", message)?;
    }
    writeln!(writer, "{}", result.summary())?;

    if result.shown.is_empty() {
        return Ok(());
    }

    writeln!(writer, "{}", table::headers().join("\t"))?;
    for record in &result.shown {
        writeln!(writer, "{}", table::display_cells(record).join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::RecordSet;
    use crate::filter::RecordFilter;
    use crate::record::RawRecord;
    use crate::status::NO_DATA_MESSAGE;

    #[test]
    fn report_lists_rows_with_placeholders() {
        let mut raw = RawRecord::default();
        raw.set("catalogNumber", "IBS001");
        raw.set("genus", "Panthera");
        let filter = RecordFilter::new(RecordSet::from_raw(vec![raw]));

        let mut out = Vec::new();
        write_report(&mut out, &filter.filter("panthera")).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Showing 1 of 1 records (limit 500). Total loaded: 1.");
        assert!(lines[1].starts_with("Catalog\tOrder\tFamily\tGenus"));
        assert_eq!(lines[2], "IBS001\t-\t-\tPanthera\t-\t-\t-\t-\t-\t-");
    }

    #[test]
    fn report_for_empty_set_has_notice() {
        let filter = RecordFilter::new(RecordSet::empty());
        let mut out = Vec::new();
        write_report(&mut out, &filter.filter("")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            format!(
                "{}\nShowing 0 of 0 records (limit 500). Total loaded: 0.\n",
                NO_DATA_MESSAGE
            )
        );
    }
}
