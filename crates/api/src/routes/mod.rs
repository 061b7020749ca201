pub mod catalog;
pub mod health;
pub mod orders;
pub mod periods;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                 list clients
/// /categories              list categories
/// /products                list products (with category names)
///
/// /periods/current         the open period whose window contains today
/// /periods/close           close the open period + lock settled orders
///
/// /orders                  list (?client_id=), create
/// /orders/{id}/status      change status (approval locks)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Read-only reference data (clients, categories, products).
        .merge(catalog::router())
        // Collection period registry.
        .nest("/periods", periods::router())
        // Order lifecycle.
        .nest("/orders", orders::router())
}
