//! Order status constants and the locking rules around them.
//!
//! Defines the valid order statuses, when a status change permanently locks
//! an order, and which orders a period close sweeps into the locked state.
//! Also holds the line-item presence checks and total arithmetic so the
//! repository layer never re-derives them.

use serde::Deserialize;

use crate::types::DbId;

/// Order is awaiting adjudication.
pub const STATUS_PENDING: &str = "pending";

/// Order was approved. Approval is the transition that locks on its own.
pub const STATUS_APPROVED: &str = "approved";

/// Order was rejected. Still editable until its period closes.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid order statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Whether moving to `new_status` permanently locks the order.
///
/// Only approval locks immediately; a rejected order keeps its lock flag
/// untouched and can be re-adjudicated until its period closes.
pub fn locks_on_transition(new_status: &str) -> bool {
    new_status == STATUS_APPROVED
}

/// Whether the period-close sweep locks an order with this status.
///
/// Pending orders are left unlocked by the sweep; they remain adjudicable
/// after the period has closed.
pub fn locked_by_period_close(status: &str) -> bool {
    status == STATUS_APPROVED || status == STATUS_REJECTED
}

/// One line of an order as submitted by the caller.
///
/// `price` is the caller-supplied unit price captured at submission time.
/// It is trusted as-is and never re-read from the product row afterwards;
/// pricing integrity checks belong to a layer above this core.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLine {
    pub product_id: DbId,
    pub quantity: i32,
    pub price: f64,
}

/// Sum of `price * quantity` over all lines.
pub fn order_total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(|l| l.price * f64::from(l.quantity)).sum()
}

/// Presence checks for a new order: a client and at least one line.
pub fn validate_new_order(client_id: DbId, lines: &[OrderLine]) -> Result<(), String> {
    if client_id <= 0 {
        return Err("client_id is required".to_string());
    }
    if lines.is_empty() {
        return Err("items must contain at least one line".to_string());
    }
    Ok(())
}
