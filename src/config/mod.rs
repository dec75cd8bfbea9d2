//! Payroll rate configuration.
//!
//! This module provides the [`PayrollRates`] struct holding the tunable
//! rates for a payroll run, and a loader for reading them from a YAML file.

mod loader;
mod types;

pub use loader::load_rates;
pub use types::PayrollRates;
