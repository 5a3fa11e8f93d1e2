//! Response types for the hours review API.
//!
//! This module defines the success body of `POST /review` together with the
//! error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReviewError;
use crate::models::{DailyTotal, HoursReport};

/// Response body for a successful `POST /review`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Identifier logged with every line of this request.
    pub correlation_id: Uuid,
    /// Distinct technicians in the cleaned data, in order of first appearance.
    pub technicians: Vec<String>,
    /// Daily totals ordered by technician then date.
    pub daily_totals: Vec<DailyTotal>,
    /// The report views.
    pub report: HoursReport,
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

    /// Creates an invalid query parameter error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_QUERY",
            message,
            "Query parameters are minimum_hours, overtime_hours, rounding, include_travel_time and technicians",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
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

impl From<ReviewError> for ApiErrorResponse {
    fn from(error: ReviewError) -> Self {
        let message = error.to_string();
        match error {
            ReviewError::ParseError { .. } => ApiErrorResponse::bad_request(ApiError::with_details(
                "PARSE_ERROR",
                message,
                "The upload is not well-formed CSV",
            )),
            ReviewError::MissingColumn { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "MISSING_COLUMN",
                    message,
                    "Exports need Technician Name, Payroll Date, Task Name, Type and Duration (mins)",
                ))
            }
            ReviewError::DateParseError { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("DATE_PARSE_ERROR", message))
            }
            ReviewError::DataValidationError { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("DATA_VALIDATION_ERROR", message))
            }
            ReviewError::InvalidConfig { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_CONFIG", message))
            }
            ReviewError::ConfigNotFound { .. } | ReviewError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            ReviewError::ExportError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}
