//! Floor state types
//!
//! Everything the dashboard polls for: effective table statuses,
//! occupancy figures, and reservation rejection verdicts. Produced by
//! the engine crate, consumed by the frontend.

pub mod occupancy;
pub mod rejection;
pub mod snapshot;
pub mod status;

// Re-exports
pub use occupancy::*;
pub use rejection::*;
pub use snapshot::*;
pub use status::*;
