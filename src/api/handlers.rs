//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayrollResult, TimeEntry, WeeklyReport};
use crate::validation::{ValidationError, validate_entry};

use super::request::{TimeEntryRequest, WeeklyReportQuery};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, PayrollResponse};
use super::state::AppState;

type EntryPayload = Result<Json<Option<TimeEntryRequest>>, JsonRejection>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/time-entries",
            get(list_entries_handler).post(create_entry_handler),
        )
        .route("/api/time-entries/calculate", post(calculate_handler))
        .route(
            "/api/time-entries/report/weekly/:employee_id",
            get(weekly_report_handler),
        )
        .route(
            "/api/time-entries/:id",
            get(get_entry_handler)
                .put(update_entry_handler)
                .delete(delete_entry_handler),
        )
        .with_state(state)
}

/// Serializes a body with the given status and an explicit JSON content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON body rejection to a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
    error_response(ApiErrorResponse::bad_request(error))
}

/// Parses and validates a time-entry body.
///
/// A `null` body reaches the validator as a missing entry.
fn parse_entry(correlation_id: Uuid, payload: EntryPayload) -> Result<TimeEntry, Response> {
    let entry: Option<TimeEntry> = match payload {
        Ok(Json(request)) => request.map(Into::into),
        Err(rejection) => return Err(json_rejection_response(correlation_id, rejection)),
    };

    if let Err(reason) = validate_entry(entry.as_ref()) {
        warn!(
            correlation_id = %correlation_id,
            reason = %reason,
            "Time entry rejected"
        );
        return Err(error_response(EngineError::from(reason).into()));
    }

    entry.ok_or_else(|| error_response(EngineError::from(ValidationError::MissingEntry).into()))
}

/// Extracts a numeric path parameter, mapping failures to a 400 response.
fn parse_path<T>(
    correlation_id: Uuid,
    path: Result<Path<T>, PathRejection>,
) -> Result<T, Response> {
    path.map(|Path(value)| value).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Invalid path parameter"
        );
        error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
            rejection.body_text(),
        )))
    })
}

/// Prices an entry, mapping an unrepresentable amount to a 400 response.
fn price_entry(
    state: &AppState,
    correlation_id: Uuid,
    entry: &TimeEntry,
) -> Result<PayrollResult, Response> {
    state.engine().calculate(entry).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            employee_id = entry.employee_id,
            error = %err,
            "Time entry could not be priced"
        );
        error_response(err.into())
    })
}

fn not_found(correlation_id: Uuid, id: u64) -> Response {
    warn!(correlation_id = %correlation_id, id, "Time entry not found");
    error_response(EngineError::EntryNotFound { id }.into())
}

/// Handler for GET /api/health.
async fn health_handler() -> impl IntoResponse {
    json_response(StatusCode::OK, HealthResponse::healthy())
}

/// Handler for GET /api/time-entries.
async fn list_entries_handler(State(state): State<AppState>) -> impl IntoResponse {
    let entries = state.repository().list();
    info!(count = entries.len(), "Listing time entries");
    json_response(StatusCode::OK, entries)
}

/// Handler for GET /api/time-entries/:id.
async fn get_entry_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.repository().get(id) {
        Some(entry) => json_response(StatusCode::OK, entry),
        None => not_found(correlation_id, id),
    }
}

/// Handler for POST /api/time-entries.
///
/// Validates the entry, prices it and stores it with its total pay.
async fn create_entry_handler(State(state): State<AppState>, payload: EntryPayload) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let mut entry = match parse_entry(correlation_id, payload) {
        Ok(entry) => entry,
        Err(response) => return response,
    };

    entry.total_pay = match price_entry(&state, correlation_id, &entry) {
        Ok(result) => result.total_pay,
        Err(response) => return response,
    };
    let stored = state.repository().create(entry);

    info!(
        correlation_id = %correlation_id,
        id = stored.id,
        employee_id = stored.employee_id,
        total_pay = %stored.total_pay,
        "Time entry created"
    );
    json_response(StatusCode::CREATED, stored)
}

/// Handler for PUT /api/time-entries/:id.
///
/// Replaces the editable fields and re-prices the entry. The stored employee
/// id and country code are kept.
async fn update_entry_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: EntryPayload,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing update request");

    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Some(mut entry) = state.repository().get(id) else {
        return not_found(correlation_id, id);
    };

    let changes = match parse_entry(correlation_id, payload) {
        Ok(changes) => changes,
        Err(response) => return response,
    };
    entry.apply_changes(changes);
    entry.total_pay = match price_entry(&state, correlation_id, &entry) {
        Ok(result) => result.total_pay,
        Err(response) => return response,
    };

    match state.repository().update(id, entry) {
        Ok(updated) => {
            info!(
                correlation_id = %correlation_id,
                id,
                total_pay = %updated.total_pay,
                "Time entry updated"
            );
            json_response(StatusCode::OK, updated)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Update failed");
            error_response(err.into())
        }
    }
}

/// Handler for DELETE /api/time-entries/:id.
async fn delete_entry_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.repository().delete(id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, id, "Time entry deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Delete failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /api/time-entries/calculate.
///
/// Prices an entry without storing it.
async fn calculate_handler(State(state): State<AppState>, payload: EntryPayload) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let entry = match parse_entry(correlation_id, payload) {
        Ok(entry) => entry,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = match price_entry(&state, correlation_id, &entry) {
        Ok(result) => result,
        Err(response) => return response,
    };
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = entry.employee_id,
        bonus_lines = result.breakdown.len(),
        total_pay = %result.total_pay,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );
    json_response(StatusCode::OK, PayrollResponse::new(&entry, result))
}

/// Handler for GET /api/time-entries/report/weekly/:employee_id.
async fn weekly_report_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<WeeklyReportQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let employee_id = match parse_path(correlation_id, path) {
        Ok(employee_id) => employee_id,
        Err(response) => return response,
    };

    let start_date = match query {
        Ok(Query(query)) => query.start_date,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid weekly report query"
            );
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            )));
        }
    };

    let end_date = WeeklyReport::window_end(start_date);
    let entries = state
        .repository()
        .query_by_employee(employee_id, start_date, end_date);
    let report = match WeeklyReport::from_entries(employee_id, start_date, entries) {
        Ok(report) => report,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id,
                error = %err,
                "Weekly report could not be totalled"
            );
            return error_response(err.into());
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id,
        entries = report.entries.len(),
        total_hours = %report.total_hours,
        total_pay = %report.total_pay,
        "Weekly report generated"
    );
    json_response(StatusCode::OK, report)
}
