//! Floor Engine - table status and reservation management for the dining room
//!
//! Architecture:
//! - core: engine policy (tunable windows) and the clock abstraction
//! - reservations: candidate validation and normalization
//! - floor: status resolution, occupancy aggregation, layout, manager, monitor
//! - store: persistence trait plus the in-memory backend
//! - utils: logging setup

pub mod core;
pub mod floor;
pub mod reservations;
pub mod store;
pub mod utils;

pub use crate::core::{Clock, FixedClock, FloorPolicy, SystemClock};
pub use floor::{
    FloorManager, FloorMonitor, LayoutPositions, aggregate_occupancy, resolve_table,
};
pub use reservations::validate_reservation;
pub use store::{FloorStore, MemoryStore, StoreError, StoreResult};
pub use utils::{init_logger, init_logger_with_file};
