//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for triggering payroll
//! runs and reading the results for a month.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProcessRunRequest;
pub use response::{ApiError, PayrollRecordResponse};
pub use state::AppState;
