//! Payroll record model.
//!
//! This module defines the [`PayrollRecord`] type produced by a payroll run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryMonth;

/// One employee's computed payroll for one salary month.
///
/// Records are created only by a payroll run and deleted only by an
/// overwrite run; they are never mutated in place. The net salary is not
/// stored: it is derived from the stored components on every read, so the
/// stored fields remain the single source of truth.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollRecord, SalaryMonth};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = PayrollRecord {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     salary_month: SalaryMonth::new(2024, 1).unwrap(),
///     basic_salary: Decimal::new(300000, 2),
///     allowances: Decimal::new(100000, 2),
///     deductions: Decimal::new(40000, 2),
/// };
/// assert_eq!(record.net_salary(), Decimal::new(360000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The salary month this record covers.
    pub salary_month: SalaryMonth,
    /// The prorated basic salary for the month.
    pub basic_salary: Decimal,
    /// Total allowances for the month.
    pub allowances: Decimal,
    /// Total deductions for the month.
    pub deductions: Decimal,
}

impl PayrollRecord {
    /// The net salary, derived from the stored components.
    ///
    /// Always `basic_salary + allowances - deductions`; recomputing at
    /// read time avoids drift if components were ever edited outside a run.
    pub fn net_salary(&self) -> Decimal {
        self.basic_salary + self.allowances - self.deductions
    }
}
