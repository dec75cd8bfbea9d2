//! Storage ports for the payroll engine.
//!
//! The engine reads employees/attendance and reads/writes payroll records
//! through the traits defined here; persistence mechanics live behind them.
//! In-memory implementations are provided for tests and small deployments.

mod memory;
mod ports;

pub use memory::{InMemoryEmployeeStore, InMemoryPayrollStore};
pub use ports::{EmployeeStore, EmployeeWithAttendance, PayrollStore};
