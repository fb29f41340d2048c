//! Tunable constants of the fight analyzer.
//!
//! Defaults match the in-game rules; a settings file only needs the keys
//! it wants to override.

use serde::{Deserialize, Serialize};

/// Kill streaks reset once a kill lands this long after the streak's first kill
pub const DEFAULT_STREAK_WINDOW_SECS: f64 = 18.0;
/// Multi-hero windows are `1 / buckets` seconds wide
pub const DEFAULT_WINDOW_BUCKETS_PER_SEC: u32 = 2;
pub const DEFAULT_WIPE_ROSTER_SIZE: usize = 5;
pub const DEFAULT_TEAMFIGHT_MIN_DEATHS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    pub streak_window_secs: f64,
    pub window_buckets_per_sec: u32,
    /// Unique deaths needed from one roster to count as a wipe
    pub wipe_roster_size: usize,
    pub teamfight_min_deaths: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            streak_window_secs: DEFAULT_STREAK_WINDOW_SECS,
            window_buckets_per_sec: DEFAULT_WINDOW_BUCKETS_PER_SEC,
            wipe_roster_size: DEFAULT_WIPE_ROSTER_SIZE,
            teamfight_min_deaths: DEFAULT_TEAMFIGHT_MIN_DEATHS,
        }
    }
}
