//! Order workflow
//!
//! - [`draft`] / [`catalog`] / [`composer`]: building an order for one table
//! - [`status`] / [`board`] / [`poller`]: tracking orders through their lifecycle

pub mod board;
pub mod catalog;
pub mod composer;
pub mod draft;
pub mod poller;
pub mod status;

pub use board::OrderBoard;
pub use catalog::{ALL_CATEGORIES, CategoryFilter, MenuCatalog};
pub use composer::{OrderComposer, SubmitBlock, SubmitOutcome};
pub use draft::{OrderDraft, OrderLineDraft};
pub use poller::OrderPoller;
pub use status::{AdvanceOutcome, advance, next_status};
