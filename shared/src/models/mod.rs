//! Data models
//!
//! Shared between the engine and the dashboard frontend (via API).
//! All IDs are `i64`, assigned by the storage layer.

pub mod reservation;
pub mod salon;
pub mod table;
pub mod table_position;

// Re-exports
pub use reservation::*;
pub use salon::*;
pub use table::*;
pub use table_position::*;
