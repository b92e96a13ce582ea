//! Floor policy knobs
//!
//! All windows that drive validation and status resolution live here so
//! the rest of the engine never hard-codes a duration.

use chrono::Duration;

pub const DEFAULT_MIN_SPACING_HOURS: i64 = 3;
pub const DEFAULT_SOON_WINDOW_HOURS: i64 = 24;
pub const DEFAULT_SPECIAL_SOON_WINDOW_MINS: i64 = 59;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Tunable policy for the floor engine.
#[derive(Debug, Clone)]
pub struct FloorPolicy {
    /// Minimum spacing between two bookings on the same table.
    ///
    /// Compared on the hour-of-day alone: 14:59 and 12:00 count as two
    /// hours apart, and the date plays no part.
    pub min_spacing_hours: i64,
    /// How far ahead a booking still counts as "soon".
    pub soon_window_hours: i64,
    /// Highlight window for special-occasion bookings.
    pub special_soon_window_mins: i64,
    /// Monitor refresh period.
    pub poll_interval_secs: u64,
}

impl Default for FloorPolicy {
    fn default() -> Self {
        Self {
            min_spacing_hours: DEFAULT_MIN_SPACING_HOURS,
            soon_window_hours: DEFAULT_SOON_WINDOW_HOURS,
            special_soon_window_mins: DEFAULT_SPECIAL_SOON_WINDOW_MINS,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl FloorPolicy {
    /// Load policy from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            min_spacing_hours: std::env::var("FLOOR_MIN_SPACING_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_SPACING_HOURS),
            soon_window_hours: std::env::var("FLOOR_SOON_WINDOW_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SOON_WINDOW_HOURS),
            special_soon_window_mins: std::env::var("FLOOR_SPECIAL_SOON_WINDOW_MINS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SPECIAL_SOON_WINDOW_MINS),
            poll_interval_secs: std::env::var("FLOOR_POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        }
    }

    pub fn soon_window(&self) -> Duration {
        Duration::hours(self.soon_window_hours)
    }

    pub fn special_soon_window(&self) -> Duration {
        Duration::minutes(self.special_soon_window_mins)
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}
