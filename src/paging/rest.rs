//! Product source backed by the venue's REST backend.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Product;
use crate::session::SessionContext;

use super::source::CollectionSource;

/// Path of the for-sale product listing.
pub const PRODUCTS_FOR_SALE_PATH: &str = "/api/products/para-venta";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The listing is either wrapped in `{"productos": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductListing {
    Wrapped { productos: Vec<Product> },
    Bare(Vec<Product>),
}

impl ProductListing {
    fn into_products(self) -> Vec<Product> {
        match self {
            ProductListing::Wrapped { productos } => productos,
            ProductListing::Bare(products) => products,
        }
    }
}

/// Fetches the for-sale products matching a search term.
#[derive(Debug, Clone)]
pub struct RestSource {
    client: Client,
    base_url: String,
    session: SessionContext,
    timeout: Duration,
}

impl RestSource {
    /// Creates a source for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The listing URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PRODUCTS_FOR_SALE_PATH)
    }

    async fn fetch(&self, filter: &str) -> EngineResult<Vec<Product>> {
        let failed = |message: String| EngineError::FetchFailed {
            filter: filter.to_string(),
            message,
        };
        let classify = |err: reqwest::Error| {
            if err.is_timeout() {
                EngineError::FetchTimeout {
                    filter: filter.to_string(),
                }
            } else {
                failed(err.to_string())
            }
        };

        let mut request = self
            .client
            .get(self.endpoint())
            .header(reqwest::header::AUTHORIZATION, self.session.authorization())
            .timeout(self.timeout);
        if !filter.is_empty() {
            request = request.query(&[("search", filter)]);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(EngineError::SessionExpired {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(failed(format!("HTTP {}", status)));
        }

        let listing: ProductListing = response.json().await.map_err(classify)?;
        let products = listing.into_products();
        debug!(filter = %filter, count = products.len(), "Fetched products");
        Ok(products)
    }
}

impl CollectionSource for RestSource {
    type Item = Product;

    async fn fetch_filtered(&self, filter: &str) -> EngineResult<Vec<Product>> {
        self.fetch(filter).await
    }
}
