//! Employee and attendance models.
//!
//! These records are owned by the surrounding HR system and are read-only
//! to the payroll engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee subject to payroll processing.
///
/// Invariant (upheld by the owning system): `basic_salary >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job designation (e.g., "Software Engineer").
    pub designation: String,
    /// The monthly basic salary before proration.
    pub basic_salary: Decimal,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
}

/// A single attendance entry for an employee on a calendar date.
///
/// The engine does not deduplicate entries: if two entries exist for the
/// same date and both are flagged present, both are counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Unique identifier for the attendance entry.
    pub id: String,
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// Whether the employee was present on that date.
    pub present: bool,
}
