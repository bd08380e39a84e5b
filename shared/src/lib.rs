//! Shared types for Tavola
//!
//! Data models exchanged with the restaurant backend (menu items, dining
//! tables, orders) and the money helpers used to total them. These types are
//! shared between `tavola-client` and `tavola-cli`.

pub mod models;
pub mod money;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
    Order, OrderLine, OrderLineInput, OrderStatus, StatusBadge, StatusUpdate,
};
