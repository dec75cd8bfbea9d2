//! In-memory storage implementations.
//!
//! Thread-safe stores backed by `Arc<RwLock<Vec<_>>>`, suitable for tests
//! and small datasets where persistence is not required.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::EngineResult;
use crate::models::{Attendance, Employee, PayrollRecord, SalaryMonth};

use super::ports::{EmployeeStore, EmployeeWithAttendance, PayrollStore};

/// An in-memory store of employees and attendance entries.
#[derive(Default, Clone)]
pub struct InMemoryEmployeeStore {
    employees: Arc<RwLock<Vec<Employee>>>,
    attendance: Arc<RwLock<Vec<Attendance>>>,
}

impl InMemoryEmployeeStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub async fn add_employee(&self, employee: Employee) {
        self.employees.write().await.push(employee);
    }

    /// Adds an attendance entry.
    pub async fn add_attendance(&self, attendance: Attendance) {
        self.attendance.write().await.push(attendance);
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn employees_with_attendance(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<EmployeeWithAttendance>> {
        let employees = self.employees.read().await;
        let attendance = self.attendance.read().await;

        Ok(employees
            .iter()
            .map(|employee| EmployeeWithAttendance {
                employee: employee.clone(),
                attendance: attendance
                    .iter()
                    .filter(|a| {
                        a.employee_id == employee.id && a.date >= from && a.date <= to
                    })
                    .cloned()
                    .collect(),
            })
            .collect())
    }
}

/// An in-memory store of payroll records.
#[derive(Default, Clone)]
pub struct InMemoryPayrollStore {
    records: Arc<RwLock<Vec<PayrollRecord>>>,
}

impl InMemoryPayrollStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored records, across all months.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PayrollStore for InMemoryPayrollStore {
    async fn for_month(&self, month: SalaryMonth) -> EngineResult<Vec<PayrollRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.salary_month == month)
            .cloned()
            .collect())
    }

    async fn insert_batch(&self, mut batch: Vec<PayrollRecord>) -> EngineResult<()> {
        let mut records = self.records.write().await;
        records.append(&mut batch);
        Ok(())
    }

    async fn delete_for_month(&self, month: SalaryMonth) -> EngineResult<usize> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.salary_month != month);
        Ok(before - records.len())
    }
}
