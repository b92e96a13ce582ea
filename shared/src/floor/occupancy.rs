//! Occupancy figures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occupancy of a single salon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SalonOccupancy {
    /// Sum of table capacities
    pub capacity: i32,
    /// Sum of per-table used capacities
    pub used_capacity: i32,
    /// used / capacity, clamped to [0, 1]; 0 when capacity is 0
    pub rate: f64,
}

/// Venue-wide occupancy, keyed by salon.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OccupancyReport {
    pub per_salon: HashMap<i64, SalonOccupancy>,
    pub venue_capacity: i32,
    pub venue_used_capacity: i32,
    pub venue_rate: f64,
}
