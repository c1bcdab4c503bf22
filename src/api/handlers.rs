//! HTTP request handlers for the Equity Vesting Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::validate_schedule;
use crate::models::Employee;

use super::request::{BatchRequest, ResultsQueryRequest};
use super::response::{ApiError, ApiErrorResponse, BatchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/batch", post(batch_handler))
        .route("/results/query", post(query_results_handler))
        .route("/results/:employee_id", get(get_result_handler))
        .route("/cache/reset", post(reset_cache_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to the API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /batch endpoint.
///
/// Accepts a batch of employees, validates their schedules, processes the
/// batch concurrently, and reports how many employees were submitted.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    // Reject the whole batch before spawning anything if a schedule is inconsistent
    for employee in &employees {
        if let Err(err) = validate_schedule(&employee.schedule) {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                error = %err,
                "Schedule validation failed"
            );
            return engine_error_response(err);
        }
    }

    let start_time = Instant::now();
    match state
        .service()
        .process_batch(&employees, request.as_of_date)
        .await
    {
        Ok(()) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                batch_size = employees.len(),
                as_of_date = %request.as_of_date,
                duration_us = duration.as_micros(),
                "Batch completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(BatchResponse {
                    processed: employees.len(),
                    as_of_date: request.as_of_date,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Batch processing failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for GET /results/{employee_id} endpoint.
async fn get_result_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state.service().get_result(&employee_id) {
        Ok(outcome) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(outcome),
        )
            .into_response(),
        Err(err) => {
            warn!(employee_id = %employee_id, error = %err, "Result lookup failed");
            engine_error_response(err)
        }
    }
}

/// Handler for POST /results/query endpoint.
///
/// Returns the cached outcomes for all requested employees, or 404 if any
/// of them has no cached outcome.
async fn query_results_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResultsQueryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    match state.service().get_batch_results(&request.employee_ids) {
        Ok(results) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(results),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Batch result query failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for POST /cache/reset endpoint.
async fn reset_cache_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.service().reset_cache();
    StatusCode::NO_CONTENT.into_response()
}
