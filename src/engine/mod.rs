//! The payroll run coordinator.
//!
//! [`PayrollEngine`] decides whether a run for a month should proceed,
//! skip (return existing results), or overwrite (purge then recompute),
//! and drives the per-employee attendance aggregation and compensation
//! calculation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_compensation, count_present_days, working_days_in_month};
use crate::config::PayrollRates;
use crate::error::EngineResult;
use crate::models::{PayrollRecord, SalaryMonth};
use crate::storage::{EmployeeStore, PayrollStore};

/// Coordinates payroll runs against the employee and payroll stores.
///
/// A run is a one-shot action per month: repeating a non-overwrite run
/// returns the already-persisted records without recomputation. An
/// overwrite run unconditionally purges the month and recomputes for
/// every employee. Runs for the same month are serialized through an
/// in-process lock, so two concurrent callers sharing one engine cannot
/// double-insert a month.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use payroll_engine::config::PayrollRates;
/// use payroll_engine::engine::PayrollEngine;
/// use payroll_engine::storage::{InMemoryEmployeeStore, InMemoryPayrollStore};
///
/// # async fn run() -> payroll_engine::error::EngineResult<()> {
/// let engine = PayrollEngine::new(
///     Arc::new(InMemoryEmployeeStore::new()),
///     Arc::new(InMemoryPayrollStore::new()),
///     PayrollRates::default(),
/// );
/// let records = engine.process_run(2024, 1, "admin", false).await?;
/// # Ok(())
/// # }
/// ```
pub struct PayrollEngine {
    employees: Arc<dyn EmployeeStore>,
    payrolls: Arc<dyn PayrollStore>,
    rates: PayrollRates,
    run_locks: Mutex<HashMap<SalaryMonth, Arc<Mutex<()>>>>,
}

impl PayrollEngine {
    /// Creates an engine over the given stores with the given rates.
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        payrolls: Arc<dyn PayrollStore>,
        rates: PayrollRates,
    ) -> Self {
        Self {
            employees,
            payrolls,
            rates,
            run_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The rates this engine applies to runs.
    pub fn rates(&self) -> &PayrollRates {
        &self.rates
    }

    /// Processes payroll for all employees for the given year and month.
    ///
    /// Validates the month before touching storage. With `overwrite` set,
    /// existing records for the month are deleted and every employee is
    /// recomputed; otherwise an already-processed month is returned as-is.
    /// The freshly persisted set is re-read from the store so the return
    /// value reflects exactly what was committed.
    ///
    /// `run_by` identifies who triggered the run; it is recorded in the
    /// run log and not interpreted further.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidMonth`] for a year
    /// before 2000 or a month outside 1-12, or
    /// [`crate::error::EngineError::Storage`] if any store call fails.
    /// A failed batch insert commits nothing; re-invoking the run
    /// completes it.
    pub async fn process_run(
        &self,
        year: i32,
        month: u32,
        run_by: &str,
        overwrite: bool,
    ) -> EngineResult<Vec<PayrollRecord>> {
        let salary_month = SalaryMonth::new(year, month)?;

        // Serialize runs per month: closes the check-then-insert race for
        // callers sharing this engine instance.
        let month_lock = self.month_lock(salary_month).await;
        let _guard = month_lock.lock().await;

        if overwrite {
            let deleted = self.payrolls.delete_for_month(salary_month).await?;
            info!(
                month = %salary_month,
                run_by,
                deleted,
                "Overwrite run: purged existing payroll records"
            );
        } else {
            let existing = self.payrolls.for_month(salary_month).await?;
            if !existing.is_empty() {
                info!(
                    month = %salary_month,
                    run_by,
                    records = existing.len(),
                    "Month already processed; returning existing payroll records"
                );
                return Ok(existing);
            }
        }

        let employees = self
            .employees
            .employees_with_attendance(salary_month.first_day(), salary_month.last_day())
            .await?;
        let working_days = working_days_in_month(salary_month);

        let mut batch = Vec::with_capacity(employees.len());
        for entry in &employees {
            let presence = count_present_days(&entry.attendance, working_days);
            if presence.assumed_full_attendance {
                warn!(
                    employee_id = %entry.employee.id,
                    month = %salary_month,
                    "No attendance recorded; assuming full attendance"
                );
            }

            let compensation = calculate_compensation(
                entry.employee.basic_salary,
                presence.present_days,
                working_days,
                &self.rates,
            );

            batch.push(PayrollRecord {
                id: Uuid::new_v4(),
                employee_id: entry.employee.id.clone(),
                salary_month,
                basic_salary: compensation.prorated_basic,
                allowances: compensation.allowances,
                deductions: compensation.total_deductions(),
            });
        }

        // One grouped insert: either the whole run commits or none of it.
        if !batch.is_empty() {
            self.payrolls.insert_batch(batch).await?;
        }

        let created = self.payrolls.for_month(salary_month).await?;
        info!(
            month = %salary_month,
            run_by,
            employees = employees.len(),
            records = created.len(),
            overwrite,
            "Payroll run completed"
        );
        Ok(created)
    }

    /// Returns the payroll records for a month.
    ///
    /// Pure read with no side effects; an unprocessed month yields an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidMonth`] for an
    /// out-of-range year/month, or
    /// [`crate::error::EngineError::Storage`] if the read fails.
    pub async fn payroll_for_month(
        &self,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<PayrollRecord>> {
        let salary_month = SalaryMonth::new(year, month)?;
        self.payrolls.for_month(salary_month).await
    }

    async fn month_lock(&self, month: SalaryMonth) -> Arc<Mutex<()>> {
        let mut locks = self.run_locks.lock().await;
        locks
            .entry(month)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
