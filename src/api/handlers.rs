//! HTTP request handlers for the payroll API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Employee;
use crate::report::PayrollReport;

use super::request::PayrollReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/report", post(payroll_report_handler))
        .with_state(state)
}

/// Handler for POST /payroll/report.
///
/// Runs every payroll rule over the posted staff list and returns the
/// resulting report. Salaries in the response are after indexation.
async fn payroll_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll report request");

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
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let mut employees = Vec::with_capacity(request.employees.len());
    for (index, employee) in request.employees.into_iter().enumerate() {
        match Employee::try_from(employee) {
            Ok(employee) => employees.push(employee),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    index,
                    error = %err,
                    "Invalid employee"
                );
                return ApiErrorResponse::bad_request(ApiError::invalid_employee(
                    index,
                    err.to_string(),
                ))
                .into_response();
            }
        }
    }

    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());

    let start_time = Instant::now();
    match PayrollReport::build(&mut employees, state.config().rates(), as_of) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                as_of = %as_of,
                total_payroll = %report.total_payroll,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll report completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
