//! HTTP API exposing the engine's preview computations.
//!
//! The form layer posts the values being entered and gets back derived end
//! times, billing breakdowns, cart quotes and report percentages. Nothing is
//! persisted.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CartQuoteRequest, InventoryShareRequest, PlayPreviewRequest, QuoteLineRequest};
pub use response::{
    ApiError, CartQuoteResponse, InventoryShareResponse, PlayPreviewResponse, QuoteLine,
};
pub use state::AppState;
