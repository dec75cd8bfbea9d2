//! Salary month model.
//!
//! This module defines the [`SalaryMonth`] type, a calendar month normalized
//! to its first day, used to key payroll records and run coordination.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month, normalized to its first day.
///
/// Payroll records are keyed by salary month, so the type is ordered and
/// hashable. Construction through [`SalaryMonth::new`] validates the
/// supported range (`year >= 2000`, `1 <= month <= 12`); deserialization
/// normalizes any date in the month to the first day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryMonth;
/// use chrono::NaiveDate;
///
/// let month = SalaryMonth::new(2024, 1).unwrap();
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// assert!(SalaryMonth::new(1999, 1).is_err());
/// assert!(SalaryMonth::new(2024, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SalaryMonth(NaiveDate);

impl SalaryMonth {
    /// Creates a salary month for the given year and month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] if `year < 2000` or `month`
    /// is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first) if year >= 2000 => Ok(Self(first)),
            _ => Err(EngineError::InvalidMonth { year, month }),
        }
    }

    /// Normalizes an arbitrary date to its salary month.
    fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// The year of this salary month.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month number (1-12) of this salary month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The first calendar day of the month (inclusive window start).
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// The last calendar day of the month (inclusive window end).
    pub fn last_day(&self) -> NaiveDate {
        let next_month = if self.0.month() == 12 {
            NaiveDate::from_ymd_opt(self.0.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.0.year(), self.0.month() + 1, 1)
        };
        next_month.and_then(|d| d.pred_opt()).unwrap_or(self.0)
    }

    /// Checks whether a date falls within this month (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}

impl std::fmt::Display for SalaryMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.0.year(), self.0.month())
    }
}

impl<'de> Deserialize<'de> for SalaryMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date = NaiveDate::deserialize(deserializer)?;
        Ok(SalaryMonth::from_date(date))
    }
}
