//! Repository for the `quarterly_periods` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::period::{ClosedPeriod, QuarterlyPeriod};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, year, quarter, status, collection_start_date, collection_end_date, \
    quarter_start_date, quarter_end_date, created_at, updated_at";

/// Provides access to the collection period registry.
///
/// A partial unique index guarantees at most one row has `status = 'open'`,
/// so "the open period" is well-defined everywhere below.
pub struct PeriodRepo;

impl PeriodRepo {
    /// Find the open period whose collection window contains `today`.
    ///
    /// A period with no `collection_end_date` is open-ended. Returns `None`
    /// when no period is open or the open one is outside its window.
    pub async fn find_open(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Option<QuarterlyPeriod>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quarterly_periods \
             WHERE status = 'open' \
               AND collection_start_date <= $1 \
               AND (collection_end_date IS NULL OR collection_end_date >= $1)"
        );
        sqlx::query_as::<_, QuarterlyPeriod>(&query)
            .bind(today)
            .fetch_optional(pool)
            .await
    }

    /// Close the open period and lock its settled orders, atomically.
    ///
    /// The open period is matched by status alone, so a period can be closed
    /// before its window starts or after it ends. `collection_end_date` is
    /// stamped with `today` only if it was unset. Every order in the period
    /// whose status is `approved` or `rejected` is locked in the same
    /// transaction; pending orders are left untouched.
    ///
    /// Returns `None` when no period is open.
    pub async fn close_open(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Option<ClosedPeriod>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let close_query = format!(
            "UPDATE quarterly_periods \
             SET status = 'closed', \
                 collection_end_date = COALESCE(collection_end_date, $1) \
             WHERE status = 'open' \
             RETURNING {COLUMNS}"
        );
        let period = sqlx::query_as::<_, QuarterlyPeriod>(&close_query)
            .bind(today)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(period) = period else {
            return Ok(None);
        };

        let locked = sqlx::query(
            "UPDATE orders \
             SET is_locked = TRUE \
             WHERE period_id = $1 \
               AND status IN ('approved', 'rejected') \
               AND is_locked = FALSE",
        )
        .bind(period.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(ClosedPeriod {
            period,
            orders_locked: locked.rows_affected(),
        }))
    }
}
