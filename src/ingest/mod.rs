//! Loading and exporting time-tracking data.
//!
//! This module reads a CSV export into typed entries, filters out leave and
//! (optionally) travel time, and writes the detail table back out as CSV.
//!
//! # Example
//!
//! ```
//! use hours_review::ingest::{DateOrder, exclude_travel_time, load_entries};
//!
//! let csv = "\
//! Technician Name,Payroll Date,Task Name,Type,Duration (mins)
//! Tech A,2024-01-01,Install,Work,300
//! Tech A,2024-01-01,Travel,Travel Time,60
//! ";
//!
//! let entries = load_entries(csv.as_bytes(), DateOrder::default()).unwrap();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(exclude_travel_time(entries).len(), 1);
//! ```

mod dates;
mod export;
mod filters;
mod loader;

pub use dates::{DateOrder, parse_payroll_date};
pub use export::{EXPORT_FILE_NAME, HOURS_COLUMN, export_detail_csv};
pub use filters::{EXCLUDED_LEAVE_PHRASES, exclude_travel_time, is_excluded_leave};
pub use loader::{
    DURATION_COLUMN, MAX_DURATION_MINUTES, PAYROLL_DATE_COLUMN, REQUIRED_COLUMNS,
    TASK_NAME_COLUMN, TECHNICIAN_COLUMN, TYPE_COLUMN, load_entries,
};
