//! Table Model

use serde::{Deserialize, Serialize};

/// Smallest bookable table.
pub const CAPACITY_MIN: i32 = 1;
/// Largest bookable table.
pub const CAPACITY_MAX: i32 = 20;

/// Persisted table status, last set by staff or automatic expiry.
///
/// The status shown on the floor plan is derived from this plus the
/// reservation book and order activity; it is never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

/// Table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    /// Display number, unique within a salon. Doubles as the default
    /// layout order index.
    pub number: u32,
    pub salon_id: i64,
    pub capacity: i32,
    pub status: TableStatus,
    /// Count of unfinished order items currently on the table,
    /// maintained by the ordering system.
    pub active_order_items: i32,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub number: u32,
    pub salon_id: i64,
    pub capacity: i32,
}

/// Update table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableUpdate {
    pub number: Option<u32>,
    pub capacity: Option<i32>,
    pub status: Option<TableStatus>,
}
