//! Response types for the invoice tracker API.
//!
//! This module defines the success envelopes, the error response structure
//! and the mapping from [`TrackerError`] to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Entry, PayPeriod};

/// Body returned by every entry mutation: a message and the updated list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Human-readable outcome.
    pub message: String,
    /// All entries after the mutation.
    pub data: Vec<Entry>,
}

impl MutationResponse {
    /// Creates a mutation response.
    pub fn new(message: impl Into<String>, data: Vec<Entry>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// A pay period together with its short label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodResponse {
    /// The derived pay period.
    #[serde(flatten)]
    pub period: PayPeriod,
    /// Short label, e.g. "Nov 9 - Nov 22".
    pub label: String,
    /// Payment date for display, e.g. "Nov 29, 2025".
    pub payment_date_text: String,
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

    /// Creates an invalid index error response.
    pub fn invalid_index(details: impl Into<String>) -> Self {
        Self::with_details("INVALID_INDEX", "Invalid index", details)
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
    /// Creates an error response.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// A 500 response for failures outside the tracker's own error type.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", message),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        match error {
            TrackerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            TrackerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            TrackerError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            TrackerError::InvalidDate { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    message,
                ),
            },
            TrackerError::InvalidHours { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid hours '{}'", value),
                    message,
                ),
            },
            TrackerError::InvalidIndex { index, len } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_index(format!(
                    "Index {} is outside the {} stored entries",
                    index, len
                )),
            },
            TrackerError::InvoiceNotFound { invoice_number } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "INVOICE_NOT_FOUND",
                    format!("Invoice not found: {}", invoice_number),
                    "No stored entry carries this invoice number",
                ),
            },
            TrackerError::StorageError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Failed to access entry data",
                    format!("{}: {}", path, message),
                ),
            },
        }
    }
}
