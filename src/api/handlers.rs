//! HTTP request handlers for the preview API.
//!
//! Each handler validates its JSON body, runs the engine computation and
//! answers with either the computed body or an [`ApiError`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ClockTime, compute_billing, inventory_share_percent, minutes_to_text};
use crate::error::{EngineError, EngineResult};
use crate::models::Cart;

use super::request::{CartQuoteRequest, InventoryShareRequest, PlayPreviewRequest};
use super::response::{
    ApiError, ApiErrorResponse, CartQuoteResponse, InventoryShareResponse, PlayPreviewResponse,
    QuoteLine,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/plays/preview", post(play_preview_handler))
        .route("/cart/quote", post(cart_quote_handler))
        .route("/reports/inventory-share", post(inventory_share_handler))
        .with_state(state)
}

/// Handler for POST /plays/preview.
///
/// Derives the end time and the cost breakdown of a session being entered.
async fn play_preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PlayPreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing play preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match preview_play(&request, &state) {
        Ok(preview) => {
            info!(
                correlation_id = %correlation_id,
                location = %request.location,
                paid_minutes = request.paid_minutes,
                total = preview.billing.total,
                duration_us = start_time.elapsed().as_micros(),
                "Play preview computed"
            );
            json_response(StatusCode::OK, &preview)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn preview_play(request: &PlayPreviewRequest, state: &AppState) -> EngineResult<PlayPreviewResponse> {
    let start = ClockTime::parse_12h(&request.start_time).ok_or_else(|| {
        EngineError::InvalidField {
            field: "start_time".to_string(),
            message: format!("'{}' is not a 12-hour time like 3:15 PM", request.start_time),
        }
    })?;

    let config = state.config();
    if !config.is_known_location(&request.location) {
        warn!(location = %request.location, "Previewing play at a location without a tariff");
    }

    let (end_time, end_time_24) = if request.paid_minutes == 0 {
        (String::new(), String::new())
    } else {
        let end = start.add_minutes(i64::from(request.paid_minutes));
        (end.to_12h_string(), end.to_24h_string())
    };

    Ok(PlayPreviewResponse {
        start_time_24: start.to_24h_string(),
        end_time,
        end_time_24,
        billing: compute_billing(
            &request.location,
            request.paid_minutes,
            request.extra_controllers,
            config.tariffs(),
            config.accessory_fee(),
        ),
        paid_time_text: minutes_to_text(request.paid_minutes),
    })
}

/// Handler for POST /cart/quote.
///
/// Prices a set of cart lines, enforcing the stock guard on each.
async fn cart_quote_handler(payload: Result<Json<CartQuoteRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cart quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match quote_cart(&request) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                lines = quote.lines.len(),
                total = %quote.total,
                "Cart quote computed"
            );
            json_response(StatusCode::OK, &quote)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn quote_cart(request: &CartQuoteRequest) -> EngineResult<CartQuoteResponse> {
    let mut cart = Cart::default();
    // repeated products accumulate
    for line in request.lines.iter().filter(|l| l.quantity > 0) {
        cart.add_quantity(&line.product, line.quantity)?;
    }

    let lines = cart
        .lines()
        .iter()
        .map(|line| {
            Ok(QuoteLine {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.subtotal()?,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(CartQuoteResponse {
        lines,
        item_count: cart.item_count(),
        total: cart.total()?,
    })
}

/// Handler for POST /reports/inventory-share.
async fn inventory_share_handler(
    payload: Result<Json<InventoryShareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing inventory share request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.sale_value.is_sign_negative() {
        return error_response(
            correlation_id,
            EngineError::InvalidAmount {
                field: "sale_value".to_string(),
                amount: request.sale_value,
            },
        );
    }

    match inventory_share_percent(request.sale_value, request.total_value) {
        Ok(percent) => json_response(StatusCode::OK, &InventoryShareResponse { percent }),
        Err(err) => error_response(correlation_id, err),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message is only in the body text
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
    json_response(StatusCode::BAD_REQUEST, &error)
}
