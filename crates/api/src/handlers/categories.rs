//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use orderdesk_db::models::category::Category;
use orderdesk_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}
