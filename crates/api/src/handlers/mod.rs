//! HTTP request handlers, one module per resource.

pub mod categories;
pub mod clients;
pub mod orders;
pub mod periods;
pub mod products;
