//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::ProcessRunRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollRecordResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/runs", post(process_run_handler))
        .route("/payroll/:year/:month", get(get_payroll_handler))
        .with_state(state)
}

/// Handler for POST /payroll/runs.
///
/// Triggers a payroll run for the requested month and returns the
/// persisted record set.
async fn process_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRunRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        run_by = %request.run_by,
        overwrite = request.overwrite,
        "Processing payroll run request"
    );

    match state
        .engine()
        .process_run(
            request.year,
            request.month,
            &request.run_by,
            request.overwrite,
        )
        .await
    {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                "Payroll run request completed"
            );
            let body: Vec<PayrollRecordResponse> =
                records.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll run failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /payroll/:year/:month.
///
/// Pure read: returns the payroll records for the month, or an empty list
/// when the month has not been processed.
async fn get_payroll_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.engine().payroll_for_month(year, month).await {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                year,
                month,
                records = records.len(),
                "Payroll read completed"
            );
            let body: Vec<PayrollRecordResponse> =
                records.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year,
                month,
                error = %err,
                "Payroll read failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
