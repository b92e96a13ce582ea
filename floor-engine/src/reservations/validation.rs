//! Reservation validation
//!
//! A candidate booking runs through an ordered gauntlet and the first
//! failing check wins: required fields, not in the past, party fits the
//! table, spacing against existing bookings. Nothing here mutates state;
//! the caller persists the returned candidate.

use chrono::{NaiveDateTime, Timelike};
use shared::floor::ReservationRejection;
use shared::models::{AcceptedReservation, Reservation, ReservationInput, Table};

use crate::core::FloorPolicy;

/// Validate a candidate against its table and that table's bookings.
///
/// `existing` may be the venue-wide reservation list; only ACTIVE
/// records on the candidate's table take part in the spacing check.
pub fn validate_reservation(
    input: &ReservationInput,
    existing: &[Reservation],
    table: &Table,
    now: NaiveDateTime,
    policy: &FloorPolicy,
) -> Result<AcceptedReservation, ReservationRejection> {
    let first_name = required_text("first_name", &input.first_name)?;
    let last_name = required_text("last_name", &input.last_name)?;
    let phone = required_text("phone", &input.phone)?;

    let Some(date) = input.date else {
        return Err(ReservationRejection::MissingField {
            field: "date".to_string(),
        });
    };
    let Some(time) = input.time else {
        return Err(ReservationRejection::MissingField {
            field: "time".to_string(),
        });
    };
    if input.party_size < 1 {
        return Err(ReservationRejection::MissingField {
            field: "party_size".to_string(),
        });
    }

    let scheduled = date.and_time(time);
    if scheduled <= now {
        return Err(ReservationRejection::PastDateTime { scheduled });
    }

    if input.party_size > table.capacity {
        return Err(ReservationRejection::CapacityExceeded {
            party_size: input.party_size,
            capacity: table.capacity,
        });
    }

    // Spacing compares the hour-of-day alone; minutes and dates are
    // invisible to it. 14:59 and 12:00 count as two hours apart.
    let candidate_hour = time.hour() as i64;
    for other in existing
        .iter()
        .filter(|r| r.table_id == input.table_id && r.is_active())
    {
        let gap = (candidate_hour - other.time.hour() as i64).abs();
        if gap < policy.min_spacing_hours {
            return Err(ReservationRejection::SpacingViolation {
                existing_time: other.time,
                required_hours: policy.min_spacing_hours,
            });
        }
    }

    Ok(AcceptedReservation {
        table_id: input.table_id,
        first_name,
        last_name,
        phone,
        email: optional_text(&input.email),
        note: optional_text(&input.note),
        date,
        time,
        party_size: input.party_size,
        is_special: input.is_special,
    })
}

fn required_text(field: &str, value: &str) -> Result<String, ReservationRejection> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ReservationRejection::MissingField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
