//! Attendance aggregation.
//!
//! Reduces an employee's attendance entries for a month into a present-day
//! count, applying the no-records-found default policy.

use crate::models::Attendance;

/// The result of aggregating a month of attendance entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentDaysResult {
    /// The number of present days to pay for.
    pub present_days: u32,
    /// True when no attendance was recorded and the full-attendance
    /// default was applied.
    pub assumed_full_attendance: bool,
}

/// Counts the present days for one employee within a salary month.
///
/// The `attendance` slice must already be restricted to the month window.
/// If it contains one or more entries, the present-day count is the number
/// of entries flagged present. Entries are not deduplicated by date:
/// duplicate same-date entries each count. If the slice is empty, the
/// employee is assumed present for every working day of the month, a
/// policy that favors the employee in the absence of data.
///
/// # Arguments
///
/// * `attendance` - The employee's attendance entries within the month
/// * `working_days` - The working-day count for the month, used as the
///   default when no attendance was recorded
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::count_present_days;
///
/// let result = count_present_days(&[], 22);
/// assert_eq!(result.present_days, 22);
/// assert!(result.assumed_full_attendance);
/// ```
pub fn count_present_days(attendance: &[Attendance], working_days: u32) -> PresentDaysResult {
    if attendance.is_empty() {
        return PresentDaysResult {
            present_days: working_days,
            assumed_full_attendance: true,
        };
    }

    PresentDaysResult {
        present_days: attendance.iter().filter(|entry| entry.present).count() as u32,
        assumed_full_attendance: false,
    }
}
