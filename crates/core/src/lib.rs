//! Domain rules for the quarterly order-collection backend.
//!
//! Pure logic only: status vocabularies, the order locking rules, collection
//! window qualification, and line-item arithmetic. The DB and API layers
//! share these so the gating/locking state machine lives in one place.

pub mod error;
pub mod orders;
pub mod period;
pub mod types;
