//! Order Model
//!
//! Orders are created by the backend from a submitted draft and afterwards only
//! change through status updates. The lifecycle is a fixed forward-only chain:
//!
//! ```text
//! PENDING -> PREPARING -> READY -> DELIVERED -> PAID
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{DiningTable, MenuItem};
use crate::money;

// ============================================================================
// Status
// ============================================================================

/// Order status
///
/// Statuses the backend sends that are not part of the chain are kept as
/// [`OrderStatus::Unknown`] so that listing orders never fails on them; no
/// action is offered for such orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
    Paid,
    Unknown(String),
}

impl OrderStatus {
    /// Every known status, in lifecycle order
    pub const CHAIN: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Paid,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Delivered => "DELIVERED",
            Self::Paid => "PAID",
            Self::Unknown(raw) => raw,
        }
    }

    /// The single status that follows this one, if any
    ///
    /// `PAID` is terminal and unrecognized statuses have no successor.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::Delivered),
            Self::Delivered => Some(Self::Paid),
            Self::Paid | Self::Unknown(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Badge severity used when rendering the status
    pub fn badge(&self) -> StatusBadge {
        match self {
            Self::Pending => StatusBadge::Warning,
            Self::Preparing => StatusBadge::Info,
            Self::Ready => StatusBadge::Primary,
            Self::Delivered => StatusBadge::Success,
            Self::Paid => StatusBadge::Dark,
            Self::Unknown(_) => StatusBadge::Secondary,
        }
    }

    /// Label of the button that advances an order in this status
    pub fn action_label(&self) -> Option<String> {
        self.next().map(|next| match next {
            Self::Paid => "Mark Paid".to_string(),
            other => format!("Mark {}", other),
        })
    }
}

impl FromStr for OrderStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "PENDING" => Self::Pending,
            "PREPARING" => Self::Preparing,
            "READY" => Self::Ready,
            "DELIVERED" => Self::Delivered,
            "PAID" => Self::Paid,
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let Ok(status) = raw.parse();
        Ok(status)
    }
}

/// Visual severity of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBadge {
    Warning,
    Info,
    Primary,
    Success,
    Dark,
    Secondary,
}

impl StatusBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Dark => "dark",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order
// ============================================================================

/// Order line as persisted by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub id: Option<i64>,
    /// Menu item snapshot taken when the order was created
    pub menu_item: MenuItem,
    pub quantity: i32,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.menu_item.price, self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Creation time (backend local time, no zone)
    pub order_time: NaiveDateTime,
    pub table: DiningTable,
    #[serde(default)]
    pub order_items: Vec<OrderLine>,
    /// Total amount in currency unit, computed by the backend
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

impl Order {
    /// Recompute the total from the line snapshots
    pub fn computed_total(&self) -> Decimal {
        money::sum(self.order_items.iter().map(OrderLine::line_total))
    }

    /// Number of portions across all lines
    pub fn item_count(&self) -> i64 {
        self.order_items.iter().map(|l| i64::from(l.quantity)).sum()
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// One element of the create-order request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub menu_item: MenuItem,
    pub quantity: i32,
    pub special_instructions: String,
}

/// Update status payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
