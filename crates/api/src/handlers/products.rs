//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::Json;
use orderdesk_db::models::product::Product;
use orderdesk_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}
