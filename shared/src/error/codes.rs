//! Unified error codes for the floor management engine
//!
//! One numbering scheme shared by the engine and the dashboard frontend:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 7xxx: Table and salon errors
//! - 9xxx: System errors
//!
//! The 0xxx block is the cross-cutting contract; domain blocks carry the
//! codes the floor operations actually emit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes serialize as bare u16 values so the dashboard can match on them
/// without string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Reservation is missing a required field
    ReservationMissingField = 4002,
    /// Reservation is scheduled in the past
    ReservationInPast = 4003,
    /// Party size exceeds table capacity
    PartyExceedsCapacity = 4004,
    /// Reservation too close to an existing one
    SpacingViolation = 4005,
    /// Reservation has already been cancelled
    ReservationAlreadyCancelled = 4006,
    /// Reservation has already been completed
    ReservationAlreadyCompleted = 4007,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is occupied
    TableOccupied = 7002,
    /// Table number already exists in salon
    TableNumberExists = 7003,
    /// Table has active reservations
    TableHasReservations = 7004,
    /// Salon not found
    SalonNotFound = 7101,
    /// Salon has tables
    SalonHasTables = 7102,
    /// Salon name already exists
    SalonNameExists = 7103,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage error
    StorageError = 9002,
}

impl ErrorCode {
    /// Numeric value as sent over the wire
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default developer-facing message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationMissingField => "Reservation is missing a required field",
            ErrorCode::ReservationInPast => "Reservation is scheduled in the past",
            ErrorCode::PartyExceedsCapacity => "Party size exceeds table capacity",
            ErrorCode::SpacingViolation => "Reservation is too close to an existing reservation",
            ErrorCode::ReservationAlreadyCancelled => "Reservation has already been cancelled",
            ErrorCode::ReservationAlreadyCompleted => "Reservation has already been completed",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::TableNumberExists => "Table number already exists in salon",
            ErrorCode::TableHasReservations => "Table has active reservations",
            ErrorCode::SalonNotFound => "Salon not found",
            ErrorCode::SalonHasTables => "Salon has associated tables",
            ErrorCode::SalonNameExists => "Salon name already exists",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::ReservationMissingField),
            4003 => Ok(ErrorCode::ReservationInPast),
            4004 => Ok(ErrorCode::PartyExceedsCapacity),
            4005 => Ok(ErrorCode::SpacingViolation),
            4006 => Ok(ErrorCode::ReservationAlreadyCancelled),
            4007 => Ok(ErrorCode::ReservationAlreadyCompleted),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableOccupied),
            7003 => Ok(ErrorCode::TableNumberExists),
            7004 => Ok(ErrorCode::TableHasReservations),
            7101 => Ok(ErrorCode::SalonNotFound),
            7102 => Ok(ErrorCode::SalonHasTables),
            7103 => Ok(ErrorCode::SalonNameExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
