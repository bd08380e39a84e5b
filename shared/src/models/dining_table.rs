//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    /// Table number shown to staff (positive, unique)
    pub table_number: i32,
    /// Seats (positive)
    pub capacity: i32,
    /// Set by the backend when an order is opened, cleared when it is paid
    #[serde(default)]
    pub occupied: bool,
}

impl DiningTable {
    pub fn is_available(&self) -> bool {
        !self.occupied
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub table_number: i32,
    pub capacity: i32,
    #[serde(default)]
    pub occupied: bool,
}

/// Update dining table payload
///
/// The backend overwrites number, capacity and occupancy together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    pub table_number: i32,
    pub capacity: i32,
    pub occupied: bool,
}

impl DiningTableUpdate {
    /// Start an update from the current state of a table
    pub fn from_table(table: &DiningTable) -> Self {
        Self {
            table_number: table.table_number,
            capacity: table.capacity,
            occupied: table.occupied,
        }
    }
}
