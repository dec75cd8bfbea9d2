//! Request types for the payroll engine API.

use serde::{Deserialize, Serialize};

/// Request body for the `POST /payroll/runs` endpoint.
///
/// # Example
///
/// ```
/// use payroll_engine::api::ProcessRunRequest;
///
/// let request: ProcessRunRequest = serde_json::from_str(
///     r#"{"year": 2024, "month": 1, "run_by": "admin"}"#,
/// ).unwrap();
/// assert!(!request.overwrite);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRunRequest {
    /// The target year (2000 or later).
    pub year: i32,
    /// The target month (1-12).
    pub month: u32,
    /// Identity of whoever triggered the run, recorded for audit.
    pub run_by: String,
    /// When true, existing records for the month are purged and
    /// recomputed. Defaults to false.
    #[serde(default)]
    pub overwrite: bool,
}
