//! Effective table status

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status a table shows on the floor plan at one instant.
///
/// Derived from persisted status, order activity, and the reservation
/// book; recomputed on every poll, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectiveStatus {
    /// No occupation and no upcoming reservation
    Empty,
    /// Seated guests or unfinished order items
    Occupied,
    /// Reserved, more than a day out
    ReservedFar,
    /// Reserved within the imminence window
    ReservedSoon,
    /// Special reservation about to start
    ReservedSpecialSoon,
}

/// Summary of the reservation that drove a `Reserved*` status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UpcomingReservation {
    pub reservation_id: i64,
    pub scheduled_at: NaiveDateTime,
    pub party_size: i32,
    pub is_special: bool,
}

/// Lapsed reservations found during resolution.
///
/// The resolver never mutates; the caller applies the intent by marking
/// the listed reservations finished and downgrading the table's
/// persisted status to AVAILABLE.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpireIntent {
    pub table_id: i64,
    pub reservation_ids: Vec<i64>,
}

/// Outcome of resolving one table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResolution {
    pub status: EffectiveStatus,
    /// The booking that drove a `Reserved*` status, when one exists.
    pub upcoming: Option<UpcomingReservation>,
    /// Present when lapsed reservations were found.
    pub expire: Option<ExpireIntent>,
}
