//! Handlers for the `/orders` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use orderdesk_core::error::CoreError;
use orderdesk_core::orders;
use orderdesk_core::types::DbId;
use orderdesk_db::models::order::{
    CreateOrder, OrderListQuery, OrderWithItems, UpdateOrderStatus,
};
use orderdesk_db::repositories::{OrderRepo, StatusChange};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/orders
///
/// Lists orders newest-first with client, period, and item context.
/// Accepts `?client_id=` to restrict to one client.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderListQuery>,
) -> AppResult<Json<Vec<OrderWithItems>>> {
    let orders = OrderRepo::list_with_items(&state.pool, params.client_id).await?;
    Ok(Json(orders))
}

/// POST /api/v1/orders
///
/// Creates a pending order in the current open period. Line prices are
/// taken from the request body, not re-read from the catalog.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    orders::validate_new_order(input.client_id, &input.items).map_err(CoreError::Validation)?;

    let order = OrderRepo::create_in_open_period(
        &state.pool,
        input.client_id,
        &input.items,
        Utc::now().date_naive(),
    )
    .await?
    .ok_or_else(|| {
        CoreError::PeriodClosed("No open collection period accepts orders today".to_string())
    })?;

    tracing::info!(
        order_id = order.id,
        client_id = order.client_id,
        total = order.total,
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "order_id": order.id, "status": order.status })),
    ))
}

/// PUT /api/v1/orders/{id}/status
///
/// Changes an order's status. Approval also locks the order and records
/// who approved it and when; a locked order refuses all further changes.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<Json<serde_json::Value>> {
    orders::validate_status(&input.status).map_err(CoreError::Validation)?;

    let change = OrderRepo::update_status(
        &state.pool,
        id,
        &input.status,
        input.admin_id.as_deref(),
        Utc::now(),
    )
    .await?;

    match change {
        StatusChange::Updated(order) => {
            tracing::info!(
                order_id = order.id,
                status = %order.status,
                is_locked = order.is_locked,
                "Order status changed"
            );
            Ok(Json(json!({ "status": order.status })))
        }
        StatusChange::Locked => Err(AppError::Core(CoreError::OrderLocked(format!(
            "Order {id} is locked and cannot change status"
        )))),
        StatusChange::NotFound => {
            Err(AppError::Core(CoreError::NotFound(format!("Order {id}"))))
        }
    }
}
