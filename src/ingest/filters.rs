//! Entry filters.
//!
//! Leave bookings (RDOs, personal, sick and annual leave) are not worked
//! time and are dropped at load time. Travel time is worked time, but a
//! reviewer may choose to leave it out of the daily totals.

use crate::models::{CleanEntry, EntrySet};

/// Task-name phrases that mark a leave booking.
///
/// A task is leave when its name contains one of these phrases, ignoring
/// case. The whole phrase must appear: "Annual Maintenance" is not leave.
pub const EXCLUDED_LEAVE_PHRASES: [&str; 5] = [
    "RDO",
    "Rostered Day Off",
    "Personal Leave",
    "Sick Leave",
    "Annual Leave",
];

/// Returns true if `task_name` is a leave booking.
///
/// # Example
///
/// ```
/// use hours_review::ingest::is_excluded_leave;
///
/// assert!(is_excluded_leave("Unpaid Sick Leave Request"));
/// assert!(is_excluded_leave("rdo"));
/// assert!(!is_excluded_leave("Install - Annual Maintenance"));
/// ```
pub fn is_excluded_leave(task_name: &str) -> bool {
    let task = task_name.to_lowercase();
    EXCLUDED_LEAVE_PHRASES
        .iter()
        .any(|phrase| task.contains(&phrase.to_lowercase()))
}

/// Removes travel-time entries, returning the remaining detail table.
///
/// # Example
///
/// ```
/// use hours_review::ingest::exclude_travel_time;
/// use hours_review::models::EntrySet;
///
/// let entries = exclude_travel_time(EntrySet::default());
/// assert!(entries.is_empty());
/// ```
pub fn exclude_travel_time(mut entries: EntrySet) -> EntrySet {
    entries.retain(|entry: &CleanEntry| !entry.is_travel_time());
    entries
}
