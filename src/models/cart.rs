//! Point-of-sale cart.
//!
//! Quantities can never exceed the stock the product had when it was added;
//! a rejected change leaves the cart as it was.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::Product;

/// A product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id.
    pub product_id: String,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Decimal,
    /// Units being sold.
    pub quantity: u32,
    /// Units in stock.
    pub stock: u32,
}

impl CartLine {
    /// `unit_price × quantity`, or `InvalidAmount` if it overflows.
    pub fn subtotal(&self) -> EngineResult<Decimal> {
        price_of(self.unit_price, self.quantity)
    }

    fn check_stock(&self, requested: u32) -> EngineResult<()> {
        if requested > self.stock {
            return Err(EngineError::InsufficientStock {
                product: self.name.clone(),
                available: self.stock,
                requested,
            });
        }
        price_of(self.unit_price, requested).map(|_| ())
    }
}

fn price_of(unit_price: Decimal, quantity: u32) -> EngineResult<Decimal> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(EngineError::InvalidAmount {
            field: "precioVenta".to_string(),
            amount: unit_price,
        })
}

/// The cart of the sale in progress.
///
/// # Examples
///
/// ```
/// use playroom_engine::models::{Cart, Product};
/// use rust_decimal::Decimal;
///
/// let soda = Product {
///     id: "p1".to_string(),
///     name: "Coca Cola".to_string(),
///     stock: 1,
///     sale_price: Decimal::from(800),
/// };
///
/// let mut cart = Cart::default();
/// cart.add(&soda).unwrap();
/// assert!(cart.add(&soda).is_err());
/// assert_eq!(cart.total().unwrap(), Decimal::from(800));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// True when nothing is in the cart.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line subtotals, or `InvalidAmount` if it overflows.
    pub fn total(&self) -> EngineResult<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |total, line| {
            let subtotal = line.subtotal()?;
            total
                .checked_add(subtotal)
                .ok_or(EngineError::InvalidAmount {
                    field: "total".to_string(),
                    amount: total,
                })
        })
    }

    /// Adds one unit of a product, returning the new line quantity.
    pub fn add(&mut self, product: &Product) -> EngineResult<u32> {
        self.add_quantity(product, 1)
    }

    /// Adds `quantity` units of a product, returning the new line quantity.
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) -> EngineResult<u32> {
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity { quantity });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let requested = line
                .quantity
                .checked_add(quantity)
                .ok_or(EngineError::InvalidQuantity { quantity })?;
            line.stock = product.stock;
            line.check_stock(requested)?;
            line.quantity = requested;
            return Ok(requested);
        }

        let line = CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.sale_price,
            quantity,
            stock: product.stock,
        };
        line.check_stock(quantity)?;
        self.lines.push(line);
        debug!(product_id = %product.id, quantity, "Added product to cart");
        Ok(quantity)
    }

    /// Sets a line's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> EngineResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| EngineError::NotInCart {
                product_id: product_id.to_string(),
            })?;

        line.check_stock(quantity)?;
        if quantity == 0 {
            self.remove(product_id);
        } else {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Removes a line; unknown ids are ignored.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Builds the sale payload for the current cart.
    ///
    /// The cart is left untouched; clear it once the backend accepts the sale.
    pub fn checkout(&self, at: DateTime<Utc>) -> EngineResult<SalePayload> {
        if self.is_empty() {
            return Err(EngineError::EmptyCart);
        }

        let total = self.total()?;
        let lines = self
            .lines
            .iter()
            .map(|l| {
                Ok(SaleLine {
                    product_id: l.product_id.clone(),
                    name: l.name.clone(),
                    quantity: l.quantity,
                    unit_price: l.unit_price,
                    subtotal: l.subtotal()?,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(SalePayload {
            lines,
            total,
            amount_paid: total,
            change: Decimal::ZERO,
            date: at,
        })
    }
}

/// A line of a sale as sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    /// Product id.
    #[serde(rename = "productoId")]
    pub product_id: String,
    /// Product name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Units sold.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// Unit price.
    #[serde(rename = "precioVenta")]
    pub unit_price: Decimal,
    /// Line subtotal.
    pub subtotal: Decimal,
}

/// A completed sale as sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    /// Sold lines.
    #[serde(rename = "productos")]
    pub lines: Vec<SaleLine>,
    /// Sale total.
    pub total: Decimal,
    /// Amount paid; counter sales are always paid exactly.
    #[serde(rename = "montoPagado")]
    pub amount_paid: Decimal,
    /// Change returned.
    #[serde(rename = "vuelto")]
    pub change: Decimal,
    /// Time of sale.
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
}
