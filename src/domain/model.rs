use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer known to the shop. The order flow only needs existence and a
/// display name; everything else about customers lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

/// A catalog entry: current price and current stock level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// One product/quantity pairing as requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedItem {
    pub id: String,
    pub quantity: u32,
}

/// A line item inside an order. `price` is the catalog price captured at
/// order time; there is no historical price versioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// The order aggregate. Built once per request and never mutated afterwards;
/// `id` and `created_at` are assigned by the order store on persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}
