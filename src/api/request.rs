//! Request types for the preview API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Request body for `POST /plays/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayPreviewRequest {
    /// Start time in 12-hour form, e.g. "3:15 PM".
    pub start_time: String,
    /// Paid playing time in minutes.
    pub paid_minutes: u32,
    /// Location name.
    pub location: String,
    /// Extra controllers rented.
    #[serde(default)]
    pub extra_controllers: u32,
}

/// One line of a cart quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLineRequest {
    /// The product as delivered by the catalog.
    pub product: Product,
    /// Units wanted.
    pub quantity: u32,
}

/// Request body for `POST /cart/quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartQuoteRequest {
    /// Lines to price.
    pub lines: Vec<QuoteLineRequest>,
}

/// Request body for `POST /reports/inventory-share`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryShareRequest {
    /// Value of the inventory at sale price.
    pub sale_value: Decimal,
    /// Total inventory value.
    pub total_value: Decimal,
}
