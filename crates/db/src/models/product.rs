//! Product entity model.

use orderdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table, enriched with its category name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub stock: i32,
    pub unit: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
