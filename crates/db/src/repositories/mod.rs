//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod client_repo;
pub mod order_repo;
pub mod period_repo;
pub mod product_repo;

pub use category_repo::CategoryRepo;
pub use client_repo::ClientRepo;
pub use order_repo::{OrderRepo, StatusChange};
pub use period_repo::PeriodRepo;
pub use product_repo::ProductRepo;
