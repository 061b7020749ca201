//! Quarterly collection period model and DTOs.

use chrono::NaiveDate;
use orderdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `quarterly_periods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuarterlyPeriod {
    pub id: DbId,
    pub year: i32,
    pub quarter: i16,
    pub status: String,
    pub collection_start_date: NaiveDate,
    pub collection_end_date: Option<NaiveDate>,
    pub quarter_start_date: NaiveDate,
    pub quarter_end_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of closing the open period: the closed record plus how many
/// orders the cascade locked.
#[derive(Debug, Clone)]
pub struct ClosedPeriod {
    pub period: QuarterlyPeriod,
    pub orders_locked: u64,
}

/// Request body for the close-period endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosePeriodRequest {
    pub admin_id: Option<String>,
}
