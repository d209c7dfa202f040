//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{audit_attendance, build_daily_report};
use crate::models::AttendanceRecord;

use super::request::{AttendanceRecordRequest, DailyAttendanceRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/calculate", post(calculate_handler))
        .route("/attendance/daily", post(daily_handler))
        .route("/settings", get(settings_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("Invalid time of day") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

/// Handler for POST /attendance/calculate.
///
/// Evaluates one attendance record and returns the result with its audit trace.
async fn calculate_handler(
    payload: Result<Json<AttendanceRecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance calculation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let record: AttendanceRecord = request.into();
    let calculation = audit_attendance(&record);

    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        working_hours = %calculation.result.working_hours,
        check_in_status = %calculation.result.check_in_status,
        warnings = calculation.audit_trace.warnings.len(),
        duration_us = calculation.audit_trace.duration_us,
        "Attendance calculation completed"
    );

    json_ok(calculation)
}

/// Handler for POST /attendance/daily.
///
/// Validates the filter against the configured catalogues, then builds the
/// report for the supplied roster.
async fn daily_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily attendance report");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = state.config().validate_filter(&request.filter) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Report filter rejected"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();
    let report = build_daily_report(request.date, &records, &request.filter);

    info!(
        correlation_id = %correlation_id,
        date = %report.date,
        records = records.len(),
        matched = report.rows.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Daily attendance report completed"
    );

    json_ok(report)
}

/// Handler for GET /settings.
async fn settings_handler(State(state): State<AppState>) -> Response {
    json_ok(state.config().settings())
}
