//! Floor state: per-table status, occupancy, layout, and the manager
//! that ties them to storage.

pub mod layout;
pub mod manager;
pub mod monitor;
pub mod occupancy;
pub mod status;

pub use layout::LayoutPositions;
pub use manager::FloorManager;
pub use monitor::FloorMonitor;
pub use occupancy::aggregate_occupancy;
pub use status::resolve_table;
