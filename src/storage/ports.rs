//! Storage trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Attendance, Employee, PayrollRecord, SalaryMonth};

/// An employee together with their attendance entries for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeWithAttendance {
    /// The employee record.
    pub employee: Employee,
    /// The employee's attendance entries within the requested range.
    pub attendance: Vec<Attendance>,
}

/// Read access to employees and their attendance.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns every employee, each with their attendance entries
    /// restricted to `[from, to]` inclusive.
    ///
    /// An employee with no attendance in the range is still returned,
    /// with an empty attendance list.
    async fn employees_with_attendance(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<EmployeeWithAttendance>>;
}

/// Read/write access to payroll records.
///
/// A batch insert is one grouped operation: if it fails, no records from
/// the batch are considered committed.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// Returns all payroll records whose salary month matches `month`.
    async fn for_month(&self, month: SalaryMonth) -> EngineResult<Vec<PayrollRecord>>;

    /// Inserts a batch of payroll records as one grouped operation.
    async fn insert_batch(&self, records: Vec<PayrollRecord>) -> EngineResult<()>;

    /// Deletes all payroll records for `month`, returning how many were
    /// removed.
    async fn delete_for_month(&self, month: SalaryMonth) -> EngineResult<usize>;
}
