//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payroll;
mod salary_month;

pub use employee::{Attendance, Employee};
pub use payroll::PayrollRecord;
pub use salary_month::SalaryMonth;
