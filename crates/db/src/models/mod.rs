//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` request DTO where the API accepts a body

pub mod category;
pub mod client;
pub mod order;
pub mod period;
pub mod product;
