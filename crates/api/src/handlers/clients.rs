//! Handlers for the `/clients` resource.

use axum::extract::State;
use axum::Json;
use orderdesk_db::models::client::Client;
use orderdesk_db::repositories::ClientRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}
