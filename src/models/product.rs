//! Product model as delivered by the catalog backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::paging::Identified;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Units in stock.
    #[serde(rename = "cantidad")]
    pub stock: u32,
    /// Unit sale price.
    #[serde(rename = "precioVenta")]
    pub sale_price: Decimal,
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}
