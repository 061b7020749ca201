//! Repository for the `orders` and `order_items` tables.

use std::collections::HashMap;

use chrono::NaiveDate;
use orderdesk_core::orders::{self, OrderLine};
use orderdesk_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::order::{Order, OrderItemDetail, OrderSummary, OrderWithItems};

/// Column list for the `orders` table.
const COLUMNS: &str = "id, client_id, period_id, total, status, is_locked, approved_at, \
    approved_by, created_at, updated_at";

/// Column list for orders joined with client and period context.
const SUMMARY_COLUMNS: &str = "o.id, o.client_id, c.name AS client_name, c.legal_entity, \
    c.address, o.period_id, qp.year, qp.quarter, qp.status AS period_status, o.total, \
    o.status, o.is_locked, o.approved_at, o.approved_by, o.created_at, o.updated_at";

/// Column list for order items joined with product context.
const ITEM_COLUMNS: &str = "oi.id, oi.order_id, oi.product_id, p.name AS product_name, \
    oi.quantity, oi.price, p.unit, oi.created_at";

/// Outcome of a status change attempted under a row lock.
#[derive(Debug)]
pub enum StatusChange {
    /// The order was updated and now carries the returned row's state.
    Updated(Order),
    /// The order is locked; nothing was written.
    Locked,
    /// No order with the given id exists.
    NotFound,
}

/// Provides order creation, listing, and the lock-aware status machine.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a pending order and its line items, gated by the open period.
    ///
    /// The qualifying open period row is read `FOR SHARE` inside the insert
    /// transaction, so a concurrent close must wait for the insert to commit
    /// (or vice versa); an order can never land in a period that closed
    /// under it. Returns `None` without writing anything when no period
    /// qualifies for `today`.
    ///
    /// The total is computed from the caller-supplied prices; they are not
    /// re-read from the product catalog.
    pub async fn create_in_open_period(
        pool: &PgPool,
        client_id: DbId,
        lines: &[OrderLine],
        today: NaiveDate,
    ) -> Result<Option<Order>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let period_id: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM quarterly_periods \
             WHERE status = 'open' \
               AND collection_start_date <= $1 \
               AND (collection_end_date IS NULL OR collection_end_date >= $1) \
             FOR SHARE",
        )
        .bind(today)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((period_id,)) = period_id else {
            return Ok(None);
        };

        let insert_query = format!(
            "INSERT INTO orders (client_id, period_id, total, status, is_locked) \
             VALUES ($1, $2, $3, 'pending', FALSE) \
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&insert_query)
            .bind(client_id)
            .bind(period_id)
            .bind(orders::order_total(lines))
            .fetch_one(&mut *tx)
            .await?;

        for line in lines {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(order.id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(order))
    }

    /// Change an order's status, refusing if the order is locked.
    ///
    /// The row is read `FOR UPDATE` so two concurrent changes serialize;
    /// the loser of an approval race observes the lock and writes nothing.
    /// Approval also sets `is_locked`, `approved_at`, and `approved_by`
    /// in the same statement.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
        admin_id: Option<&str>,
        now: Timestamp,
    ) -> Result<StatusChange, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(bool,)> =
            sqlx::query_as("SELECT is_locked FROM orders WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let locked = match current {
            None => return Ok(StatusChange::NotFound),
            Some((locked,)) => locked,
        };
        if locked {
            return Ok(StatusChange::Locked);
        }

        let order = if orders::locks_on_transition(new_status) {
            let query = format!(
                "UPDATE orders \
                 SET status = $2, is_locked = TRUE, approved_at = $3, approved_by = $4 \
                 WHERE id = $1 \
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Order>(&query)
                .bind(id)
                .bind(new_status)
                .bind(now)
                .bind(admin_id)
                .fetch_one(&mut *tx)
                .await?
        } else {
            let query = format!(
                "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Order>(&query)
                .bind(id)
                .bind(new_status)
                .fetch_one(&mut *tx)
                .await?
        };

        tx.commit().await?;
        Ok(StatusChange::Updated(order))
    }

    /// List orders newest-first, each with client/period context and items.
    ///
    /// Pass `client_id` to restrict to one client's orders.
    pub async fn list_with_items(
        pool: &PgPool,
        client_id: Option<DbId>,
    ) -> Result<Vec<OrderWithItems>, sqlx::Error> {
        let summaries = match client_id {
            Some(client_id) => {
                let query = format!(
                    "SELECT {SUMMARY_COLUMNS} FROM orders o \
                     JOIN clients c ON c.id = o.client_id \
                     LEFT JOIN quarterly_periods qp ON qp.id = o.period_id \
                     WHERE o.client_id = $1 \
                     ORDER BY o.created_at DESC"
                );
                sqlx::query_as::<_, OrderSummary>(&query)
                    .bind(client_id)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {SUMMARY_COLUMNS} FROM orders o \
                     JOIN clients c ON c.id = o.client_id \
                     LEFT JOIN quarterly_periods qp ON qp.id = o.period_id \
                     ORDER BY o.created_at DESC"
                );
                sqlx::query_as::<_, OrderSummary>(&query)
                    .fetch_all(pool)
                    .await?
            }
        };

        if summaries.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<DbId> = summaries.iter().map(|o| o.id).collect();
        let item_query = format!(
            "SELECT {ITEM_COLUMNS} FROM order_items oi \
             JOIN products p ON p.id = oi.product_id \
             WHERE oi.order_id = ANY($1) \
             ORDER BY oi.id"
        );
        let items = sqlx::query_as::<_, OrderItemDetail>(&item_query)
            .bind(&order_ids)
            .fetch_all(pool)
            .await?;

        let mut by_order: HashMap<DbId, Vec<OrderItemDetail>> = HashMap::new();
        for item in items {
            by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(summaries
            .into_iter()
            .map(|order| {
                let items = by_order.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
