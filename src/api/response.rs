//! Response types for the preview API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::Billing;
use crate::error::EngineError;

/// Response body for `POST /plays/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayPreviewResponse {
    /// Start time in 24-hour form.
    pub start_time_24: String,
    /// End time in 12-hour form; empty when no time is paid.
    pub end_time: String,
    /// End time in 24-hour form; empty when no time is paid.
    pub end_time_24: String,
    /// Cost breakdown.
    pub billing: Billing,
    /// Paid time as text, e.g. "1h 30min".
    pub paid_time_text: String,
}

/// A priced cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLine {
    /// Product id.
    pub product_id: String,
    /// Product name.
    pub name: String,
    /// Units.
    pub quantity: u32,
    /// Unit sale price.
    pub unit_price: Decimal,
    /// `unit_price × quantity`.
    pub subtotal: Decimal,
}

/// Response body for `POST /cart/quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartQuoteResponse {
    /// Priced lines.
    pub lines: Vec<QuoteLine>,
    /// Units across all lines.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Decimal,
}

/// Response body for `POST /reports/inventory-share`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryShareResponse {
    /// Share in percent, one decimal place.
    pub percent: Decimal,
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

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
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
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        message,
                    ),
                }
            }
            EngineError::FetchFailed { .. } | EngineError::FetchTimeout { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_GATEWAY,
                    error: ApiError::new("FETCH_FAILED", message),
                }
            }
            EngineError::SessionExpired { .. } => ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::new("SESSION_EXPIRED", message),
            },
            EngineError::InsufficientStock { product, .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INSUFFICIENT_STOCK",
                    message,
                    format!("Reduce the quantity of '{}' or restock it", product),
                ))
            }
            EngineError::MissingField { .. }
            | EngineError::InvalidField { .. }
            | EngineError::TooManyGames { .. }
            | EngineError::InvalidQuantity { .. }
            | EngineError::InvalidAmount { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(message))
            }
            EngineError::NotInCart { .. } | EngineError::EmptyCart => {
                ApiErrorResponse::bad_request(ApiError::new("CART_ERROR", message))
            }
        }
    }
}
