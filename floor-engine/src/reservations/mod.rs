//! Reservation intake.

pub mod validation;

pub use validation::validate_reservation;
