//! Working-day counting for a salary month.

use chrono::{Datelike, Weekday};

use crate::models::SalaryMonth;

/// The minimum working-day count used for proration.
///
/// No Gregorian month has fewer than 20 weekdays, but the floor keeps the
/// proration divisor away from zero under any calendar input.
pub const MINIMUM_WORKING_DAYS_FLOOR: u32 = 1;

/// Counts the working days (Monday through Friday) in a salary month.
///
/// Saturdays and Sundays are excluded unconditionally; there is no holiday
/// calendar. The result is floored at [`MINIMUM_WORKING_DAYS_FLOOR`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::working_days_in_month;
/// use payroll_engine::models::SalaryMonth;
///
/// let january = SalaryMonth::new(2024, 1).unwrap();
/// assert_eq!(working_days_in_month(january), 23);
/// ```
pub fn working_days_in_month(month: SalaryMonth) -> u32 {
    let last_day = month.last_day();
    let count = month
        .first_day()
        .iter_days()
        .take_while(|day| *day <= last_day)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32;

    count.max(MINIMUM_WORKING_DAYS_FLOOR)
}
