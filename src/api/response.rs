//! Response types for the payroll engine API.
//!
//! This module defines the payroll record wire representation and the
//! error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayrollRecord, SalaryMonth};

/// A payroll record as returned over the wire.
///
/// Unlike the stored record, the response carries the derived net salary
/// so clients do not have to recompute it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecordResponse {
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
    /// Net salary, derived from the stored components at response time.
    pub net_salary: Decimal,
}

impl From<PayrollRecord> for PayrollRecordResponse {
    fn from(record: PayrollRecord) -> Self {
        let net_salary = record.net_salary();
        Self {
            id: record.id,
            employee_id: record.employee_id,
            salary_month: record.salary_month,
            basic_salary: record.basic_salary,
            allowances: record.allowances,
            deductions: record.deductions,
            net_salary,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidMonth { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid payroll month: year {}, month {}", year, month),
                    "Supported range is year >= 2000 and month 1-12",
                ),
            },
            EngineError::Storage { operation, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    format!("Storage failure during {}", operation),
                    message,
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Rates configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_response_carries_derived_net_salary() {
        let record = PayrollRecord {
            id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            salary_month: SalaryMonth::new(2024, 1).unwrap(),
            basic_salary: Decimal::from_str("3000.00").unwrap(),
            allowances: Decimal::from_str("1000.00").unwrap(),
            deductions: Decimal::from_str("400.00").unwrap(),
        };

        let response = PayrollRecordResponse::from(record);
        assert_eq!(response.net_salary, Decimal::from_str("3600.00").unwrap());
    }

    #[test]
    fn test_invalid_month_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidMonth {
            year: 1999,
            month: 1,
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_MONTH");
    }

    #[test]
    fn test_storage_error_maps_to_internal_server_error() {
        let response: ApiErrorResponse =
            EngineError::storage("insert payroll batch", "disk full").into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "STORAGE_ERROR");
        assert_eq!(response.error.details.as_deref(), Some("disk full"));
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let error = ApiError::new("MALFORMED_JSON", "bad body");
        let json = serde_json::to_value(&error).unwrap();
        assert!(json.get("details").is_none());
    }
}
