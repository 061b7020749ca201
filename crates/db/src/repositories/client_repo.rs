//! Repository for the `clients` table.

use orderdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::Client;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, legal_entity, address, budget_limit, budget_used, role, \
    created_at, updated_at";

/// Provides read access to clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List all clients in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
