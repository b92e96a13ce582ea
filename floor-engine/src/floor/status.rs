//! Table status resolution
//!
//! Pure derivation of what a table shows on the floor plan right now.
//! The resolver never mutates anything: lapsed bookings come back as an
//! expire intent for the manager to apply, so calling it on every
//! render is always safe.

use chrono::NaiveDateTime;
use shared::floor::{EffectiveStatus, ExpireIntent, StatusResolution, UpcomingReservation};
use shared::models::{Reservation, Table, TableStatus};

use crate::core::FloorPolicy;

/// Resolve one table against the reservation list.
///
/// `reservations` may be the venue-wide list; only ACTIVE records for
/// this table are considered.
pub fn resolve_table(
    table: &Table,
    reservations: &[Reservation],
    now: NaiveDateTime,
    policy: &FloorPolicy,
) -> StatusResolution {
    // Seated guests trump everything, and an occupied table gets no
    // expiry scan: those bookings are judged once the meal is over.
    if table.active_order_items > 0 || table.status == TableStatus::Occupied {
        return StatusResolution {
            status: EffectiveStatus::Occupied,
            upcoming: None,
            expire: None,
        };
    }

    let active: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.table_id == table.id && r.is_active())
        .collect();

    // A booking whose slot has arrived counts as lapsed.
    let (lapsed, future): (Vec<&Reservation>, Vec<&Reservation>) =
        active.into_iter().partition(|r| r.scheduled_at() <= now);

    let expire = if lapsed.is_empty() {
        None
    } else {
        Some(ExpireIntent {
            table_id: table.id,
            reservation_ids: lapsed.iter().map(|r| r.id).collect(),
        })
    };

    if let Some(next) = future.iter().min_by_key(|r| r.scheduled_at()) {
        let lead = next.scheduled_at() - now;
        let status = if next.is_special && lead <= policy.special_soon_window() {
            EffectiveStatus::ReservedSpecialSoon
        } else if lead <= policy.soon_window() {
            EffectiveStatus::ReservedSoon
        } else {
            EffectiveStatus::ReservedFar
        };
        return StatusResolution {
            status,
            upcoming: Some(UpcomingReservation {
                reservation_id: next.id,
                scheduled_at: next.scheduled_at(),
                party_size: next.party_size,
                is_special: next.is_special,
            }),
            expire,
        };
    }

    // Persisted RESERVED with no active booking at all: trust the flag
    // over the records and keep the table held.
    if lapsed.is_empty() && table.status == TableStatus::Reserved {
        tracing::warn!(
            table_id = table.id,
            "Table marked RESERVED but no active reservation exists"
        );
        return StatusResolution {
            status: EffectiveStatus::ReservedSoon,
            upcoming: None,
            expire: None,
        };
    }

    StatusResolution {
        status: EffectiveStatus::Empty,
        upcoming: None,
        expire,
    }
}
