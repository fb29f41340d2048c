//! Highlight records produced by the fight analyzer.
//!
//! These are plain data: every record is built once per analysis call and
//! handed to the caller, which is free to serialize it however it likes.

use std::fmt;

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Sides and tiers
// ═══════════════════════════════════════════════════════════════════════════

/// One of the two opposing sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Radiant,
    Dire,
}

impl Team {
    /// The side facing this one
    pub fn opponent(self) -> Team {
        match self {
            Team::Radiant => Team::Dire,
            Team::Dire => Team::Radiant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Radiant => "radiant",
            Team::Dire => "dire",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kill-streak tier announced for consecutive kills by one hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTier {
    DoubleKill,
    TripleKill,
    UltraKill,
    Rampage,
}

impl StreakTier {
    /// Highest kill count with its own tier; anything above maps to it.
    pub const TOP_TIER_KILLS: usize = 5;

    /// Tier for a streak of `kills`, or `None` below a double kill.
    pub fn from_kills(kills: usize) -> Option<StreakTier> {
        match kills.min(Self::TOP_TIER_KILLS) {
            2 => Some(StreakTier::DoubleKill),
            3 => Some(StreakTier::TripleKill),
            4 => Some(StreakTier::UltraKill),
            5 => Some(StreakTier::Rampage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreakTier::DoubleKill => "double_kill",
            StreakTier::TripleKill => "triple_kill",
            StreakTier::UltraKill => "ultra_kill",
            StreakTier::Rampage => "rampage",
        }
    }
}

impl fmt::Display for StreakTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Highlight records
// ═══════════════════════════════════════════════════════════════════════════

/// A tracked ability that landed on several heroes at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiHeroAbility {
    /// Time of the first hit in the window
    pub game_time: f64,
    pub game_time_str: String,
    /// Internal ability identifier (alias already resolved)
    pub ability: String,
    pub ability_display: String,
    pub caster: String,
    /// Distinct heroes hit, sorted
    pub targets: Vec<String>,
    pub hero_count: usize,
}

/// Consecutive kills by one hero inside the streak window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillStreak {
    /// Time of the kill that completed the streak
    pub game_time: f64,
    pub game_time_str: String,
    pub hero: String,
    pub streak_type: StreakTier,
    pub kills: usize,
    /// Victims in kill order
    pub victims: Vec<String>,
}

/// All five heroes of one side dead within the fight (an ace)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWipe {
    /// Time of the death that completed the wipe
    pub game_time: f64,
    pub game_time_str: String,
    pub team_wiped: Team,
    /// Seconds between the first and the fifth unique death
    pub duration: f64,
    pub killer_team: Team,
}

/// Key moments extracted from one fight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FightHighlights {
    pub multi_hero_abilities: Vec<MultiHeroAbility>,
    pub kill_streaks: Vec<KillStreak>,
    pub team_wipes: Vec<TeamWipe>,
    /// Hero who opened the fight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fight_initiator: Option<String>,
    /// Display name of the ability used to open the fight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiation_ability: Option<String>,
}

impl FightHighlights {
    /// True when no detector found anything worth reporting
    pub fn is_empty(&self) -> bool {
        self.multi_hero_abilities.is_empty()
            && self.kill_streaks.is_empty()
            && self.team_wipes.is_empty()
            && self.fight_initiator.is_none()
    }
}

/// Highlights plus the fight metadata the upstream detector handed over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fight_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_str: Option<String>,
    pub total_deaths: usize,
    /// Enough deaths to call it a teamfight rather than a skirmish
    pub is_teamfight: bool,
    pub highlights: FightHighlights,
}
