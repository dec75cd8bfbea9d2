//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions for a payroll run:
//! counting working days in a month, aggregating attendance entries into a
//! present-day count, and turning (basic salary, present days, working days)
//! into prorated pay, allowances, and deductions.

mod attendance;
mod compensation;
mod working_days;

pub use attendance::{PresentDaysResult, count_present_days};
pub use compensation::{CompensationResult, TAX_DEDUCTION_KEY, calculate_compensation};
pub use working_days::{MINIMUM_WORKING_DAYS_FLOOR, working_days_in_month};
