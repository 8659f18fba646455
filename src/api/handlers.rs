//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Every handler resolves the acting principal from the `x-user-id`
//! header before touching the store; the policy model then decides row
//! visibility and write access at the storage boundary.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_wage;
use crate::models::Principal;
use crate::report::summarize;

use super::request::{
    AttendanceQuery, AttendanceRequest, CalculateWageRequest, EmployeeRequest, RoleRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// The request header carrying the authenticated user id.
///
/// Token verification belongs to the external authentication provider;
/// by the time a request reaches this API, the header value is the
/// provider's verified subject.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee).get(list_employees))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/attendance", post(create_attendance).get(list_attendance))
        .route("/wages", get(list_wages))
        .route("/wages/calculate", post(calculate_handler))
        .route("/wages/:id", get(get_wage))
        .route("/wages/:id/pay", post(mark_paid_handler))
        .route("/reports/summary", get(summary_handler))
        .route("/roles", post(assign_role).get(list_roles))
        .with_state(state)
}

/// Resolves the acting principal from the identity header.
fn resolve_principal(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Principal, ApiErrorResponse> {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiErrorResponse::unauthenticated("Missing x-user-id header"))?;
    let user_id = Uuid::parse_str(raw)
        .map_err(|_| ApiErrorResponse::unauthenticated("Malformed x-user-id header"))?;
    Ok(state.store().principal_for(user_id)?)
}

// ----------------------------------------------------------------------
// Employees
// ----------------------------------------------------------------------

async fn create_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<EmployeeRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let employee = state
        .store()
        .insert_employee(&principal, request.into_employee(Uuid::new_v4()))?;
    info!(employee_id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn list_employees(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let employees = state.store().list_employees(&principal)?;
    Ok(Json(employees))
}

async fn get_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let employee = state.store().get_employee(&principal, id)?;
    Ok(Json(employee))
}

async fn update_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(request): Json<EmployeeRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let employee = state
        .store()
        .update_employee(&principal, request.into_employee(id))?;
    info!(employee_id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

async fn delete_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    state.store().delete_employee(&principal, id)?;
    info!(employee_id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ----------------------------------------------------------------------
// Attendance
// ----------------------------------------------------------------------

async fn create_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AttendanceRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let record = state
        .store()
        .insert_attendance(&principal, request.into_record(Uuid::new_v4()))?;
    info!(
        attendance_id = %record.id,
        employee_id = %record.employee_id,
        date = %record.date,
        "Attendance captured"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let mut records = state.store().list_attendance(&principal)?;
    if let Some(employee_id) = query.employee_id {
        records.retain(|r| r.employee_id == employee_id);
    }
    if let Some(from) = query.from {
        records.retain(|r| r.date >= from);
    }
    if let Some(to) = query.to {
        records.retain(|r| r.date <= to);
    }
    Ok(Json(records))
}

// ----------------------------------------------------------------------
// Wages
// ----------------------------------------------------------------------

/// Handler for POST /wages/calculate.
///
/// Accepts a calculation request and returns the persisted wage record.
async fn calculate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CalculateWageRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing wage calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
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

    let principal = match resolve_principal(&state, &headers) {
        Ok(principal) => principal,
        Err(response) => return response.into_response(),
    };

    let start_time = Instant::now();
    let result = calculate_wage(
        state.store(),
        &principal,
        request.employee_id,
        request.period_start,
        request.period_end,
        request.calculation_type,
    );
    match result {
        Ok(record) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                wage_id = %record.id,
                employee_id = %record.employee_id,
                total_wage = %record.total_wage,
                duration_us = duration.as_micros(),
                "Wage calculation completed successfully"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Wage calculation failed"
            );
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}

async fn list_wages(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let wages = state.store().list_wages(&principal)?;
    Ok(Json(wages))
}

async fn get_wage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let wage = state.store().get_wage(&principal, id)?;
    Ok(Json(wage))
}

async fn mark_paid_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let record = state.store().mark_paid(&principal, id)?;
    info!(wage_id = %record.id, paid_at = ?record.paid_at, "Wage record marked paid");
    Ok(Json(record))
}

// ----------------------------------------------------------------------
// Reports and roles
// ----------------------------------------------------------------------

async fn summary_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let wages = state.store().list_wages(&principal)?;
    Ok(Json(summarize(&wages)))
}

async fn assign_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RoleRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let assignment = state
        .store()
        .assign_role(&principal, request.user_id, request.role)?;
    info!(user_id = %assignment.user_id, role = assignment.role.as_str(), "Role granted");
    Ok((StatusCode::CREATED, Json(assignment)))
}

async fn list_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let principal = resolve_principal(&state, &headers)?;
    let roles = state.store().list_roles(&principal)?;
    Ok(Json(roles))
}
