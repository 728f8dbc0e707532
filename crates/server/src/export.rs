//! CSV export sink for tabular reports.

use csv::Writer;
use engine::{Cell, TabularReport};

/// Writes the header line followed by one record per report row.
///
/// Empty cells become empty fields.
pub fn to_csv(report: &TabularReport) -> Result<Vec<u8>, csv::Error> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(&report.headers)?;
    for row in &report.rows {
        writer.write_record(row.iter().map(Cell::render))?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
