//! Order requests from the public catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Product;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Waiting for staff.
    #[serde(rename = "pendiente")]
    Pending,
    /// Confirmed with the customer.
    #[serde(rename = "confirmado")]
    Confirmed,
    /// Delivered.
    #[serde(rename = "completado")]
    Completed,
    /// Cancelled.
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// Every status, in display order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Statuses an order can be moved to from this one.
    pub fn transitions(self) -> Vec<OrderStatus> {
        Self::ALL.into_iter().filter(|s| *s != self).collect()
    }
}

/// The order form filled in by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Customer name.
    pub customer_name: String,
    /// Contact phone.
    pub phone: String,
    /// Optional contact email.
    #[serde(default)]
    pub email: String,
    /// Units requested.
    pub quantity: u32,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl OrderRequest {
    /// Validates the form against the product and builds the payload.
    pub fn validate(&self, product: &Product) -> EngineResult<OrderPayload> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(EngineError::MissingField {
                field: "nombreCliente".to_string(),
            });
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(EngineError::MissingField {
                field: "telefono".to_string(),
            });
        }
        if self.quantity < 1 {
            return Err(EngineError::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        if self.quantity > product.stock {
            return Err(EngineError::InsufficientStock {
                product: product.name.clone(),
                available: product.stock,
                requested: self.quantity,
            });
        }

        Ok(OrderPayload {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit_price: product.sale_price,
            customer_name: customer_name.to_string(),
            phone: phone.to_string(),
            email: self.email.trim().to_string(),
            quantity: self.quantity,
            notes: self.notes.clone(),
            total: product.sale_price * Decimal::from(self.quantity),
        })
    }
}

/// A validated order as sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Product id.
    #[serde(rename = "productoId")]
    pub product_id: String,
    /// Product name.
    #[serde(rename = "productoNombre")]
    pub product_name: String,
    /// Unit price.
    #[serde(rename = "precioVenta")]
    pub unit_price: Decimal,
    /// Customer name.
    #[serde(rename = "nombreCliente")]
    pub customer_name: String,
    /// Contact phone.
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Contact email, possibly empty.
    pub email: String,
    /// Units requested.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// Notes.
    #[serde(rename = "notas")]
    pub notes: String,
    /// `unit_price × quantity`.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "p9".to_string(),
            name: "Control PS5".to_string(),
            stock: 3,
            sale_price: Decimal::from(35000),
        }
    }

    fn request(quantity: u32) -> OrderRequest {
        OrderRequest {
            customer_name: " María ".to_string(),
            phone: "8888-0000".to_string(),
            email: String::new(),
            quantity,
            notes: "Entregar el sábado".to_string(),
        }
    }

    #[test]
    fn test_valid_order() {
        let payload = request(2).validate(&product()).unwrap();

        assert_eq!(payload.customer_name, "María");
        assert_eq!(payload.total, Decimal::from(70000));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["productoId"], "p9");
        assert_eq!(json["cantidad"], 2);
    }

    #[test]
    fn test_name_and_phone_required() {
        let mut req = request(1);
        req.customer_name = "   ".to_string();
        assert!(matches!(
            req.validate(&product()),
            Err(EngineError::MissingField { field }) if field == "nombreCliente"
        ));

        let mut req = request(1);
        req.phone.clear();
        assert!(matches!(
            req.validate(&product()),
            Err(EngineError::MissingField { field }) if field == "telefono"
        ));
    }

    #[test]
    fn test_quantity_bounds() {
        assert_eq!(
            request(0).validate(&product()),
            Err(EngineError::InvalidQuantity { quantity: 0 })
        );
        assert!(matches!(
            request(4).validate(&product()),
            Err(EngineError::InsufficientStock { available: 3, .. })
        ));
    }

    #[test]
    fn test_status_transitions_exclude_current() {
        let next = OrderStatus::Pending.transitions();
        assert_eq!(next.len(), 3);
        assert!(!next.contains(&OrderStatus::Pending));
    }

    #[test]
    fn test_status_serializes_lowercase_spanish() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Confirmed).unwrap(),
            "confirmado"
        );
    }
}
