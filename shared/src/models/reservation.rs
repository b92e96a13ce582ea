//! Reservation Model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// Only ACTIVE reservations participate in conflict checks and status
/// resolution; CANCELLED and COMPLETED are inert history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Active,
    Cancelled,
    Completed,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub table_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: i32,
    /// Special-event flag (birthday, anniversary, ...). Gets its own
    /// highlight window on the floor plan.
    pub is_special: bool,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Combined date and time of the booking.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Whether this reservation still counts for conflicts and display.
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

/// Reservation candidate as submitted from the dashboard form.
///
/// Fields arrive unvalidated; date and time may be absent when the
/// form was not filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationInput {
    pub table_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub party_size: i32,
    pub is_special: bool,
}

/// Validated, normalized candidate ready for persistence.
///
/// Produced only by the validator; the storage layer assigns the id
/// and records it as an ACTIVE [`Reservation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedReservation {
    pub table_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: i32,
    pub is_special: bool,
}

impl AcceptedReservation {
    /// Combined date and time of the booking.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
