//! Occupancy aggregation
//!
//! Rolls per-table resolutions up into seats-in-use per salon and for
//! the whole venue. Estimates only; nobody counts actual chairs.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use shared::floor::{EffectiveStatus, OccupancyReport, SalonOccupancy, StatusResolution};
use shared::models::{Reservation, Table};

use crate::core::FloorPolicy;
use crate::floor::status::resolve_table;

/// Aggregate seats in use across the venue.
pub fn aggregate_occupancy(
    tables: &[Table],
    reservations: &[Reservation],
    now: NaiveDateTime,
    policy: &FloorPolicy,
) -> OccupancyReport {
    let mut per_salon: HashMap<i64, SalonOccupancy> = HashMap::new();

    for table in tables {
        let resolution = resolve_table(table, reservations, now, policy);
        let used = seats_in_use(table, &resolution);
        let entry = per_salon.entry(table.salon_id).or_default();
        entry.capacity += table.capacity;
        entry.used_capacity += used;
    }

    let mut venue_capacity = 0;
    let mut venue_used_capacity = 0;
    for occupancy in per_salon.values_mut() {
        occupancy.rate = rate(occupancy.used_capacity, occupancy.capacity);
        venue_capacity += occupancy.capacity;
        venue_used_capacity += occupancy.used_capacity;
    }

    OccupancyReport {
        per_salon,
        venue_capacity,
        venue_used_capacity,
        venue_rate: rate(venue_used_capacity, venue_capacity),
    }
}

/// Seats a table ties up given its resolved state.
///
/// Occupied tables count at full capacity. Reserved tables count the
/// expected party when it fits, half the capacity rounded up when not.
fn seats_in_use(table: &Table, resolution: &StatusResolution) -> i32 {
    match resolution.status {
        EffectiveStatus::Occupied => table.capacity,
        EffectiveStatus::ReservedFar
        | EffectiveStatus::ReservedSoon
        | EffectiveStatus::ReservedSpecialSoon => match resolution.upcoming {
            Some(upcoming) if upcoming.party_size <= table.capacity => upcoming.party_size,
            _ => (table.capacity + 1) / 2,
        },
        EffectiveStatus::Empty => 0,
    }
}

fn rate(used: i32, capacity: i32) -> f64 {
    if capacity <= 0 {
        return 0.0;
    }
    (used as f64 / capacity as f64).clamp(0.0, 1.0)
}
