//! Detail export.
//!
//! Writes the (optionally technician-filtered) detail table back out as CSV
//! for download. Original columns are kept in input order with the payroll
//! date normalised to ISO form, and an `Hours` column is added.

use tracing::debug;

use crate::error::{ReviewError, ReviewResult};
use crate::models::EntrySet;

/// Suggested file name for the export download.
pub const EXPORT_FILE_NAME: &str = "filtered_hours.csv";

/// Header of the derived hours column.
pub const HOURS_COLUMN: &str = "Hours";

fn export_error(error: impl std::fmt::Display) -> ReviewError {
    ReviewError::ExportError {
        message: error.to_string(),
    }
}

/// Renders the detail rows as CSV.
///
/// When `technicians` is `Some`, only rows for the listed technicians are
/// written; `None` writes every row.
///
/// # Example
///
/// ```
/// use hours_review::ingest::{DateOrder, export_detail_csv, load_entries};
///
/// let csv = "\
/// Technician Name,Payroll Date,Task Name,Type,Duration (mins)
/// Tech A,01/02/2024,Install,Work,90
/// Tech B,01/02/2024,Install,Work,60
/// ";
/// let entries = load_entries(csv.as_bytes(), DateOrder::MonthFirst)?;
///
/// let export = export_detail_csv(&entries, Some(&["Tech A".to_string()][..]))?;
/// assert_eq!(
///     export,
///     "Technician Name,Payroll Date,Task Name,Type,Duration (mins),Hours\n\
///      Tech A,2024-01-02,Install,Work,90,1.5\n"
/// );
/// # Ok::<(), hours_review::error::ReviewError>(())
/// ```
pub fn export_detail_csv(
    entries: &EntrySet,
    technicians: Option<&[String]>,
) -> ReviewResult<String> {
    let mut headers = entries.headers.clone();
    let hours_column = match headers.iter().position(|h| h == HOURS_COLUMN) {
        Some(index) => index,
        None => {
            headers.push(HOURS_COLUMN.to_string());
            headers.len() - 1
        }
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers).map_err(export_error)?;

    let mut written = 0usize;
    for entry in entries.entries.iter().filter(|entry| {
        technicians.is_none_or(|names| names.iter().any(|name| name == &entry.technician))
    }) {
        let mut record = entry.fields.clone();
        record.resize(headers.len(), String::new());
        record[entries.date_column] = entry.payroll_date.format("%Y-%m-%d").to_string();
        record[hours_column] = entry.hours.normalize().to_string();
        writer.write_record(&record).map_err(export_error)?;
        written += 1;
    }

    let bytes = writer.into_inner().map_err(export_error)?;
    debug!(rows = written, "Rendered detail export");
    String::from_utf8(bytes).map_err(export_error)
}
