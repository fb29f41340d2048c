//! Shared types for clash
//!
//! Highlight records and analyzer settings live here so front ends can
//! consume them without pulling in the analysis engine.

pub mod formatting;
pub mod highlights;
pub mod settings;

pub use highlights::{
    FightHighlights, FightReport, KillStreak, MultiHeroAbility, StreakTier, Team, TeamWipe,
};
pub use settings::AnalyzerSettings;
