//! Shared types for the floor management engine
//!
//! Common types used by the engine crate and the dashboard frontend
//! (via API): data models, floor state snapshots, and error types.

pub mod error;
pub mod floor;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Error re-exports (for convenient access)
pub use error::{AppError, AppResult, ErrorCode};

// Floor state re-exports
pub use floor::{EffectiveStatus, FloorSnapshot, ReservationRejection, StatusResolution};
