//! Time export loading.
//!
//! This module turns a CSV time-tracking export into an [`EntrySet`]. The
//! required columns are resolved once from the header row, every row is read
//! into a typed [`RawEntry`], and leave bookings are dropped. Any malformed
//! row aborts the load; no partial result is returned.

use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ReviewError, ReviewResult};
use crate::models::{CleanEntry, EntrySet, RawEntry};

use super::dates::{DateOrder, parse_payroll_date};
use super::filters::is_excluded_leave;

/// Header of the technician column.
pub const TECHNICIAN_COLUMN: &str = "Technician Name";
/// Header of the payroll date column.
pub const PAYROLL_DATE_COLUMN: &str = "Payroll Date";
/// Header of the task name column.
pub const TASK_NAME_COLUMN: &str = "Task Name";
/// Header of the entry type column.
pub const TYPE_COLUMN: &str = "Type";
/// Header of the duration column.
pub const DURATION_COLUMN: &str = "Duration (mins)";

/// Largest accepted duration for a single entry, in minutes.
///
/// Keeps daily sums and means far inside `Decimal` range so aggregation
/// cannot overflow.
pub const MAX_DURATION_MINUTES: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Columns every export must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    TECHNICIAN_COLUMN,
    PAYROLL_DATE_COLUMN,
    TASK_NAME_COLUMN,
    TYPE_COLUMN,
    DURATION_COLUMN,
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Positions of the required columns within a record.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    technician: usize,
    payroll_date: usize,
    task_name: usize,
    entry_type: usize,
    duration: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> ReviewResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ReviewError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            technician: find(TECHNICIAN_COLUMN)?,
            payroll_date: find(PAYROLL_DATE_COLUMN)?,
            task_name: find(TASK_NAME_COLUMN)?,
            entry_type: find(TYPE_COLUMN)?,
            duration: find(DURATION_COLUMN)?,
        })
    }

    fn read(&self, record: &StringRecord, line: u64, order: DateOrder) -> ReviewResult<RawEntry> {
        let field = |index: usize| record.get(index).unwrap_or_default();

        let date_value = field(self.payroll_date);
        let payroll_date =
            parse_payroll_date(date_value, order).ok_or_else(|| ReviewError::DateParseError {
                line,
                value: date_value.to_string(),
            })?;

        let duration_minutes = parse_duration(field(self.duration), line)?;

        Ok(RawEntry {
            line,
            technician: field(self.technician).to_string(),
            payroll_date,
            task_name: field(self.task_name).to_string(),
            entry_type: field(self.entry_type).to_string(),
            duration_minutes,
            fields: record.iter().map(str::to_string).collect(),
        })
    }
}

/// Parses a duration in minutes, rejecting empty, non-numeric, negative and
/// oversized values.
fn parse_duration(value: &str, line: u64) -> ReviewResult<Decimal> {
    let invalid = |message: String| ReviewError::DataValidationError {
        line,
        field: DURATION_COLUMN.to_string(),
        message,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("missing duration".to_string()));
    }

    let minutes = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid(format!("non-numeric duration '{}'", trimmed)))?;

    if minutes < Decimal::ZERO {
        return Err(invalid(format!("negative duration '{}'", trimmed)));
    }
    if minutes > MAX_DURATION_MINUTES {
        return Err(invalid(format!(
            "duration '{}' exceeds {} minutes",
            trimmed, MAX_DURATION_MINUTES
        )));
    }

    Ok(minutes)
}

fn csv_error(error: csv::Error) -> ReviewError {
    let line = error.position().map(|p| p.line()).unwrap_or(0);
    let message = match error.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields, found {}", expected_len, len),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        _ => error.to_string(),
    };
    ReviewError::ParseError { line, message }
}

/// Loads a CSV time export into a detail table of clean entries.
///
/// Header names are compared after trimming whitespace, and a leading UTF-8
/// byte-order mark is ignored. Rows booked against leave tasks are dropped.
///
/// # Errors
///
/// - [`ReviewError::ParseError`] if the input is not well-formed CSV
/// - [`ReviewError::MissingColumn`] if a required column is absent
/// - [`ReviewError::DateParseError`] if a payroll date cannot be read
/// - [`ReviewError::DataValidationError`] if a duration is missing,
///   non-numeric or negative
///
/// # Example
///
/// ```
/// use hours_review::ingest::{DateOrder, load_entries};
/// use rust_decimal::Decimal;
///
/// let csv = "\
/// Technician Name,Payroll Date,Task Name,Type,Duration (mins)
/// Tech A,2024-01-01,Install,Work,300
/// Tech A,2024-01-02,Annual Leave,Leave,480
/// ";
///
/// let entries = load_entries(csv.as_bytes(), DateOrder::MonthFirst)?;
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries.entries[0].hours, Decimal::from(5));
/// # Ok::<(), hours_review::error::ReviewError>(())
/// ```
pub fn load_entries(input: &[u8], date_order: DateOrder) -> ReviewResult<EntrySet> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut entries = Vec::new();
    let mut rows_read = 0usize;
    let mut leave_rows = 0usize;

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows_read += 1;

        let raw = columns.read(&record, line, date_order)?;
        if is_excluded_leave(&raw.task_name) {
            leave_rows += 1;
            continue;
        }
        entries.push(CleanEntry::from(raw));
    }

    debug!(
        rows_read,
        leave_rows,
        entries = entries.len(),
        "Loaded time export"
    );

    Ok(EntrySet {
        headers,
        date_column: columns.payroll_date,
        entries,
    })
}
