//! Handlers for the `/periods` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use orderdesk_core::error::CoreError;
use orderdesk_core::period::quarter_label;
use orderdesk_db::models::period::{ClosePeriodRequest, QuarterlyPeriod};
use orderdesk_db::repositories::PeriodRepo;
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/periods/current
///
/// Returns the open period whose collection window contains today,
/// or JSON `null` when none qualifies.
pub async fn current(
    State(state): State<AppState>,
) -> AppResult<Json<Option<QuarterlyPeriod>>> {
    let period = PeriodRepo::find_open(&state.pool, Utc::now().date_naive()).await?;
    Ok(Json(period))
}

/// POST /api/v1/periods/close
///
/// Closes the open period and locks its settled orders in one transaction.
/// The caller must identify itself with `admin_id`; the value is trusted
/// as-is.
pub async fn close(
    State(state): State<AppState>,
    Json(input): Json<ClosePeriodRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let admin_id = input
        .admin_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| CoreError::Unauthorized("admin_id is required".to_string()))?;

    let closed = PeriodRepo::close_open(&state.pool, Utc::now().date_naive())
        .await?
        .ok_or_else(|| CoreError::NotFound("Open period".to_string()))?;

    tracing::info!(
        period_id = closed.period.id,
        orders_locked = closed.orders_locked,
        admin_id = %admin_id,
        "Collection period closed"
    );

    let label = quarter_label(closed.period.year, closed.period.quarter);
    Ok(Json(json!({
        "message": format!("Period {label} closed; {} orders locked", closed.orders_locked),
        "period_id": closed.period.id,
    })))
}
