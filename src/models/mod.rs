//! Domain models for the playroom engine.
//!
//! Models mirror the backend's JSON (which uses Spanish keys) through serde
//! renames; Rust-side names are English.

mod cart;
mod order;
mod pagination;
mod play;
mod product;

pub use cart::{Cart, CartLine, SaleLine, SalePayload};
pub use order::{OrderPayload, OrderRequest, OrderStatus};
pub use pagination::{Page, Pagination};
pub use play::{PaymentStatus, PlayDraft, PlayPayload, PlaySession};
pub use product::Product;
