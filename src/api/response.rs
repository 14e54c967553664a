//! Response types for the payroll engine API.
//!
//! This module defines the result envelopes returned by the handlers and
//! the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DeductionBreakdown, OvertimeCategory, PayBreakdown};

/// Response body for `POST /net-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetPayResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The computed pay breakdown.
    pub pay: PayBreakdown,
}

impl NetPayResponse {
    /// Wraps a pay breakdown in a result envelope.
    pub fn new(pay: PayBreakdown) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            pay,
        }
    }
}

/// Response body for `POST /deductions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionsResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The salary the deductions were computed from.
    pub monthly_salary: Decimal,
    /// The computed deduction breakdown.
    pub deductions: DeductionBreakdown,
}

impl DeductionsResponse {
    /// Wraps a deduction breakdown in a result envelope.
    pub fn new(monthly_salary: Decimal, deductions: DeductionBreakdown) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            monthly_salary,
            deductions,
        }
    }
}

/// Response body for `POST /overtime-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimePayResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The hourly rate derived from the monthly salary.
    pub hourly_rate: Decimal,
    /// The overtime category applied.
    pub category: OvertimeCategory,
    /// The multiplier bound to the category.
    pub multiplier: Decimal,
    /// Overtime hours worked.
    pub hours: Decimal,
    /// The computed overtime pay.
    pub overtime_pay: Decimal,
}

impl OvertimePayResponse {
    /// Wraps an overtime computation in a result envelope.
    pub fn new(
        hourly_rate: Decimal,
        category: OvertimeCategory,
        hours: Decimal,
        overtime_pay: Decimal,
    ) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            hourly_rate,
            category,
            multiplier: category.multiplier(),
            hours,
            overtime_pay,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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
        let code = match &error {
            EngineError::InvalidSalary { .. } => "INVALID_SALARY",
            EngineError::InvalidHours { .. } => "INVALID_HOURS",
            EngineError::InvalidRate { .. } => "INVALID_RATE",
            EngineError::InvalidMultiplier { .. } => "INVALID_MULTIPLIER",
            EngineError::InvalidAmount { .. } => "INVALID_AMOUNT",
        };

        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::with_details(
                code,
                error.to_string(),
                "The request contains a value outside the engine's domain",
            ),
        }
    }
}
