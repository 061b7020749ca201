//! Route definitions for the read-only reference data: clients,
//! categories, and products.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, clients, products};
use crate::state::AppState;

/// Top-level reference data routes.
///
/// ```text
/// GET /clients      -> clients::list
/// GET /categories   -> categories::list
/// GET /products     -> products::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(clients::list))
        .route("/categories", get(categories::list))
        .route("/products", get(products::list))
}
