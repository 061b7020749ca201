//! Client entity model.

use orderdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub legal_entity: Option<String>,
    pub address: Option<String>,
    pub budget_limit: f64,
    pub budget_used: f64,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
