//! Tavola Client - order workflow client for the restaurant backend
//!
//! Provides network-based HTTP calls to the backend API and the client-side
//! order workflow built on top of them: composing an order for a table and
//! driving orders through their status chain.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod order;
pub mod validation;

pub use api::{Gateway, RestaurantApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use order::{
    AdvanceOutcome, CategoryFilter, MenuCatalog, OrderBoard, OrderComposer, OrderDraft,
    OrderPoller, SubmitBlock, SubmitOutcome,
};

// Re-export shared types for convenience
pub use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
    Order, OrderLine, OrderStatus,
};
