//! Error types for the playroom engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine reports explicitly. Clock parsing and tariff
//! lookups never fail; they fall back to empty or zero values instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the playroom engine.
///
/// # Example
///
/// ```
/// use playroom_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tariffs.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tariffs.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The backend could not deliver the collection for a filter.
    #[error("Failed to fetch items for filter '{filter}': {message}")]
    FetchFailed {
        /// The filter key of the failed request.
        filter: String,
        /// A description of the failure.
        message: String,
    },

    /// The backend did not answer in time.
    #[error("Timed out fetching items for filter '{filter}'")]
    FetchTimeout {
        /// The filter key of the timed out request.
        filter: String,
    },

    /// The backend rejected the session token.
    #[error("Session expired or not authorized (HTTP {status})")]
    SessionExpired {
        /// The HTTP status returned by the backend.
        status: u16,
    },

    /// A required form field was left blank.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A field held a value that could not be interpreted.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The name of the field.
        field: String,
        /// A description of what was wrong.
        message: String,
    },

    /// More games were selected than a session allows.
    #[error("At most {max} games can be selected, got {selected}")]
    TooManyGames {
        /// The maximum number of games allowed.
        max: usize,
        /// The number of games that were selected.
        selected: usize,
    },

    /// A quantity exceeds the stock on hand.
    #[error("Insufficient stock for '{product}': {available} available, {requested} requested")]
    InsufficientStock {
        /// The product name.
        product: String,
        /// Units available.
        available: u32,
        /// Units requested.
        requested: u32,
    },

    /// A quantity of zero, or one that cannot be added to a line.
    #[error("Invalid quantity {quantity}")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: u32,
    },

    /// A cart operation referenced a product that is not in the cart.
    #[error("Product '{product_id}' is not in the cart")]
    NotInCart {
        /// The product id.
        product_id: String,
    },

    /// Checkout was attempted on an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A monetary value was negative where only non-negative values are valid.
    #[error("Invalid amount for '{field}': {amount}")]
    InvalidAmount {
        /// The field holding the amount.
        field: String,
        /// The rejected amount.
        amount: Decimal,
    },
}

impl EngineError {
    /// Returns true for failures of the fetch boundary.
    ///
    /// These are the only errors a [`crate::paging::PagedCollection`] records
    /// as a retryable failed state.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            EngineError::FetchFailed { .. }
                | EngineError::FetchTimeout { .. }
                | EngineError::SessionExpired { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
