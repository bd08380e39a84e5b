//! Data models
//!
//! Shared between the client library and the CLI (via the backend API).
//! JSON field names follow the backend's camelCase convention.
//! All IDs are `i64`.

pub mod dining_table;
pub mod menu_item;
pub mod order;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
