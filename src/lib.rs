//! Monthly Payroll Computation Engine
//!
//! This crate computes monthly payroll for a set of employees from their
//! attendance records: prorated basic salary, per-present-day allowances,
//! and a flat-rate tax deduction, persisted exactly once per
//! (employee, month) unless an overwrite run is requested.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;
