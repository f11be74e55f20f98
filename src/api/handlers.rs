//! HTTP request handlers for the Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_payroll, calculate_settlement};
use crate::words::to_words;

use super::request::{PayrollRequest, SettlementRequest};
use super::response::{
    ApiError, ApiErrorResponse, FormattedPayroll, FormattedSettlement, PayrollResponse,
    SettlementResponse, WordsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/settlement", post(settlement_handler))
        .route("/payroll", post(payroll_handler))
        .route("/words/:n", get(words_handler))
        .with_state(state)
}

/// Handler for POST /settlement.
///
/// Sanitizes the submitted form and returns the settlement report together
/// with its receipt formatting.
async fn settlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return json_error(rejection_to_error(rejection, correlation_id)),
    };

    let config = state.settlement_config();
    let input = form.sanitize();

    let start_time = Instant::now();
    let report = calculate_settlement(&input, config);
    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);

    info!(
        correlation_id = %correlation_id,
        monthly_salary = %input.monthly_salary,
        years_equivalent = %report.years_equivalent,
        total = %report.total,
        warnings = report.audit_trace.warnings.len(),
        duration_us,
        "Settlement calculated"
    );

    let formatted = FormattedSettlement::from_report(&report, config.currency());
    json_ok(SettlementResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        duration_us,
        report,
        formatted,
    })
}

/// Handler for POST /payroll.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_error(rejection_to_error(rejection, correlation_id)),
    };

    if !request.employee.is_active() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %request.employee.id,
            "Payroll requested for inactive employee"
        );
        return json_error(ApiErrorResponse::bad_request(ApiError::inactive_employee(
            &request.employee.id,
        )));
    }

    if let Some(rate) = request
        .deduction_rate
        .filter(|rate| *rate < Decimal::ZERO || *rate > Decimal::ONE)
    {
        warn!(
            correlation_id = %correlation_id,
            deduction_rate = %rate,
            "Deduction rate override out of range"
        );
        return json_error(ApiErrorResponse::bad_request(
            ApiError::invalid_deduction_rate(rate),
        ));
    }

    let config = state.settlement_config();
    let deduction_rate = request
        .deduction_rate
        .unwrap_or(config.withholdings().payroll_deduction_rate);
    let slip = calculate_payroll(
        &request.employee,
        deduction_rate,
        config.benefits().days_per_month,
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %slip.employee_id,
        net_pay = %slip.net_pay,
        "Payroll slip calculated"
    );

    let formatted = FormattedPayroll::from_slip(&slip, config.currency());
    json_ok(PayrollResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        slip,
        formatted,
    })
}

/// Handler for GET /words/:n.
async fn words_handler(Path(raw): Path<String>) -> Response {
    match raw.trim().parse::<u64>() {
        Ok(number) => json_ok(WordsResponse {
            number,
            words: to_words(number),
        }),
        Err(_) => {
            warn!(raw = %raw, "Words requested for a non-numeric value");
            json_error(ApiErrorResponse::bad_request(ApiError::invalid_number(&raw)))
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn json_error(api_error: ApiErrorResponse) -> Response {
    api_error.into_response()
}
