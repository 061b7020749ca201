//! Repository for the `products` table.

use orderdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list for the `products` table, joined with the category name.
const COLUMNS: &str = "p.id, p.name, p.price, p.category_id, c.name AS category_name, \
    p.stock, p.unit, p.created_at, p.updated_at";

/// Provides read access to the product catalog.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products in id order, with their category names.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             ORDER BY p.id"
        );
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
