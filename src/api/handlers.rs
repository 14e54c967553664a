//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers are thin: they parse the request, call the pure calculation
//! functions, and wrap the result in an envelope. All state lives in the
//! request; the engine itself holds none.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_deductions, compute_net_pay, compute_overtime_pay, hourly_rate_from_monthly_salary,
};

use super::request::{DeductionsRequest, NetPayRequest, OvertimePayRequest};
use super::response::{
    ApiError, ApiErrorResponse, DeductionsResponse, NetPayResponse, OvertimePayResponse,
};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/net-pay", post(net_pay_handler))
        .route("/deductions", post(deductions_handler))
        .route("/overtime-pay", post(overtime_pay_handler))
}

/// Converts a JSON extraction rejection into an API error.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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

/// Handler for POST /net-pay.
///
/// Computes the full pay breakdown for a base salary plus optional overtime
/// pay and allowances.
async fn net_pay_handler(
    payload: Result<Json<NetPayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing net-pay request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    match compute_net_pay(request.base_salary, request.overtime_pay, request.allowances) {
        Ok(pay) => {
            info!(
                correlation_id = %correlation_id,
                base_salary = %request.base_salary,
                gross_pay = %pay.gross_pay,
                net_pay = %pay.net_pay,
                "Net-pay calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(NetPayResponse::new(pay)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Net-pay calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /deductions.
///
/// Computes the four statutory deductions for a monthly salary.
async fn deductions_handler(
    payload: Result<Json<DeductionsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deductions request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    match compute_deductions(request.monthly_salary) {
        Ok(deductions) => {
            info!(
                correlation_id = %correlation_id,
                monthly_salary = %request.monthly_salary,
                total = %deductions.total,
                "Deductions calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(DeductionsResponse::new(request.monthly_salary, deductions)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Deductions calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /overtime-pay.
///
/// Derives the hourly rate from the monthly salary and applies the
/// category's rate multiplier to the hours worked.
async fn overtime_pay_handler(
    payload: Result<Json<OvertimePayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime-pay request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let result = hourly_rate_from_monthly_salary(request.monthly_salary).and_then(|hourly_rate| {
        compute_overtime_pay(hourly_rate, request.hours, request.category.multiplier())
            .map(|pay| (hourly_rate, pay))
    });

    match result {
        Ok((hourly_rate, overtime_pay)) => {
            info!(
                correlation_id = %correlation_id,
                monthly_salary = %request.monthly_salary,
                hours = %request.hours,
                category = ?request.category,
                overtime_pay = %overtime_pay,
                "Overtime-pay calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(OvertimePayResponse::new(
                    hourly_rate,
                    request.category,
                    request.hours,
                    overtime_pay,
                )),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Overtime-pay calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
