//! Floor snapshot

use super::occupancy::OccupancyReport;
use super::status::{EffectiveStatus, UpcomingReservation};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One table as rendered on the floor plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusView {
    pub table_id: i64,
    pub salon_id: i64,
    pub number: u32,
    pub capacity: i32,
    pub status: EffectiveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<UpcomingReservation>,
    /// Layout slot; defaults to the table number when never rearranged.
    pub order_index: u32,
}

/// Full floor state at one instant, published on every poll tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorSnapshot {
    pub generated_at: NaiveDateTime,
    /// Tables in render order
    pub tables: Vec<TableStatusView>,
    pub occupancy: OccupancyReport,
}
