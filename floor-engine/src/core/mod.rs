//! Engine core: tunable policy and the time source.

pub mod clock;
pub mod config;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FloorPolicy;
