//! Order entity models and DTOs.

use orderdesk_core::orders::OrderLine;
use orderdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub client_id: DbId,
    pub period_id: Option<DbId>,
    pub total: f64,
    pub status: String,
    pub is_locked: bool,
    pub approved_at: Option<Timestamp>,
    pub approved_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An order row enriched with client and period context (JOIN query).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderSummary {
    pub id: DbId,
    pub client_id: DbId,
    pub client_name: String,
    pub legal_entity: Option<String>,
    pub address: Option<String>,
    pub period_id: Option<DbId>,
    pub year: Option<i32>,
    pub quarter: Option<i16>,
    pub period_status: Option<String>,
    pub total: f64,
    pub status: String,
    pub is_locked: bool,
    pub approved_at: Option<Timestamp>,
    pub approved_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An order item row enriched with its product name and unit (JOIN query).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItemDetail {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: DbId,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub unit: String,
    pub created_at: Timestamp,
}

/// An order summary with its line items attached.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: OrderSummary,
    pub items: Vec<OrderItemDetail>,
}

/// Request body for creating an order.
///
/// Fields default so that a missing field surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    #[serde(default)]
    pub client_id: DbId,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// Request body for changing an order's status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatus {
    #[serde(default)]
    pub status: String,
    pub admin_id: Option<String>,
}

/// Query parameters for the order list endpoint (`?client_id=`).
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub client_id: Option<DbId>,
}
