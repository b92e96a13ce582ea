//! Reservation rejection verdicts

use crate::error::{AppError, ErrorCode};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a reservation candidate was refused.
///
/// Checks run in a fixed order and the first failure wins, so a
/// rejection names exactly one cause. Serialized for display in the
/// dashboard form.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationRejection {
    /// A mandatory form field was left blank
    #[error("required field missing: {field}")]
    MissingField { field: String },

    /// Scheduled date/time is not in the future
    #[error("reservation time {scheduled} is already past")]
    PastDateTime { scheduled: NaiveDateTime },

    /// Party does not fit the table
    #[error("party of {party_size} exceeds table capacity of {capacity}")]
    CapacityExceeded { party_size: i32, capacity: i32 },

    /// Too close to another booking on the same table
    #[error("too close to existing reservation at {existing_time} ({required_hours}h required)")]
    SpacingViolation {
        existing_time: NaiveTime,
        required_hours: i64,
    },
}

impl ReservationRejection {
    /// Error code this rejection maps to on the wire.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::ReservationMissingField,
            Self::PastDateTime { .. } => ErrorCode::ReservationInPast,
            Self::CapacityExceeded { .. } => ErrorCode::PartyExceedsCapacity,
            Self::SpacingViolation { .. } => ErrorCode::SpacingViolation,
        }
    }
}

impl From<ReservationRejection> for AppError {
    fn from(rejection: ReservationRejection) -> Self {
        let code = rejection.error_code();
        let message = rejection.to_string();
        match rejection {
            ReservationRejection::MissingField { field } => {
                AppError::with_message(code, message).with_detail("field", field)
            }
            ReservationRejection::PastDateTime { scheduled } => {
                AppError::with_message(code, message)
                    .with_detail("scheduled_at", scheduled.to_string())
            }
            ReservationRejection::CapacityExceeded {
                party_size,
                capacity,
            } => AppError::with_message(code, message)
                .with_detail("party_size", party_size)
                .with_detail("capacity", capacity),
            ReservationRejection::SpacingViolation {
                existing_time,
                required_hours,
            } => AppError::with_message(code, message)
                .with_detail("existing_time", existing_time.to_string())
                .with_detail("required_hours", required_hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_error_codes() {
        let r = ReservationRejection::MissingField {
            field: "phone".to_string(),
        };
        assert_eq!(r.error_code(), ErrorCode::ReservationMissingField);

        let r = ReservationRejection::CapacityExceeded {
            party_size: 8,
            capacity: 4,
        };
        assert_eq!(r.error_code(), ErrorCode::PartyExceedsCapacity);
    }

    #[test]
    fn test_rejection_to_app_error() {
        let r = ReservationRejection::CapacityExceeded {
            party_size: 8,
            capacity: 4,
        };
        let err: AppError = r.into();
        assert_eq!(err.code, ErrorCode::PartyExceedsCapacity);
        let details = err.details.unwrap();
        assert_eq!(details.get("party_size").unwrap(), 8);
        assert_eq!(details.get("capacity").unwrap(), 4);
    }

    #[test]
    fn test_rejection_messages() {
        let r = ReservationRejection::MissingField {
            field: "first_name".to_string(),
        };
        assert_eq!(format!("{}", r), "required field missing: first_name");

        let r = ReservationRejection::CapacityExceeded {
            party_size: 10,
            capacity: 6,
        };
        assert_eq!(
            format!("{}", r),
            "party of 10 exceeds table capacity of 6"
        );
    }

    #[test]
    fn test_rejection_serialize_tagged() {
        let r = ReservationRejection::MissingField {
            field: "phone".to_string(),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"type\":\"MISSING_FIELD\""));
        assert!(json.contains("\"field\":\"phone\""));
    }
}
