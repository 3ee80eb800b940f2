//! Response types for the Payroll Engine API.
//!
//! This module defines the payroll response body, the error response
//! structures and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{BonusLine, PayrollResult, TimeEntry};

/// Response body of the payroll calculation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResponse {
    /// Name of the employee the entry belongs to.
    pub employee_name: String,
    /// Wages before any bonus.
    pub base_pay: Decimal,
    /// Sum of all bonus lines.
    pub bonus_pay: Decimal,
    /// Base pay plus bonus pay.
    pub total_pay: Decimal,
    /// The rendered breakdown text, one line per bonus.
    pub breakdown: String,
    /// The structured breakdown.
    pub line_items: Vec<BonusLine>,
}

impl PayrollResponse {
    /// Builds the response for a priced entry.
    pub fn new(entry: &TimeEntry, result: PayrollResult) -> Self {
        Self {
            employee_name: entry.employee_name.clone(),
            base_pay: result.base_pay,
            bonus_pay: result.bonus_pay,
            total_pay: result.total_pay,
            breakdown: result.breakdown_text(),
            line_items: result.breakdown,
        }
    }
}

/// Response body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the service answers.
    pub status: String,
    /// Time the check was answered.
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// A healthy response stamped with the current time.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
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

    /// Creates an entry not found error response.
    pub fn entry_not_found(id: u64) -> Self {
        Self::with_details(
            "ENTRY_NOT_FOUND",
            format!("Time entry not found: {}", id),
            format!("No time entry with id {} is stored", id),
        )
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

impl ApiErrorResponse {
    /// Creates a 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
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
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::InvalidEntry(reason) => {
                ApiErrorResponse::bad_request(ApiError::validation_error(reason.to_string()))
            }
            EngineError::EntryNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::entry_not_found(id),
            },
            EngineError::PayOverflow { component } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "PAY_OUT_OF_RANGE",
                    "Pay cannot be represented for this entry",
                    format!("Overflow while computing {}", component),
                ))
            }
        }
    }
}
