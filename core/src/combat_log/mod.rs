//! Combat log input model
//!
//! Events and deaths arrive already parsed from the replay and scoped to a
//! single fight. The analyzer only reads them.

use serde::{Deserialize, Serialize};

/// Kind of a combat log entry, tagged the way the replay parser emits it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CombatEventKind {
    Damage,
    Heal,
    /// A status effect was applied to the target
    ModifierAdd,
    ModifierRemove,
    Death,
    /// An ability was cast on (or hit) the target
    Ability,
    Item,
    Gold,
    Xp,
    Purchase,
    Buyback,
    /// Any tag this build does not know about
    #[default]
    #[serde(other)]
    Other,
}

impl CombatEventKind {
    /// Kinds that represent an ability landing, directly or via its modifier
    pub fn is_ability_application(self) -> bool {
        matches!(self, Self::Ability | Self::ModifierAdd)
    }
}

/// One atomic combat log occurrence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatLogEvent {
    #[serde(rename = "type")]
    pub kind: CombatEventKind,
    /// Seconds from the horn
    pub game_time: f64,
    #[serde(default)]
    pub tick: u32,
    #[serde(default)]
    pub attacker: String,
    #[serde(default)]
    pub attacker_is_hero: bool,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub target_is_hero: bool,
    /// Ability, item or modifier identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit: Option<bool>,
}

impl CombatLogEvent {
    /// Ability identifier, treating an empty string as absent
    pub fn ability_id(&self) -> Option<&str> {
        self.ability.as_deref().filter(|a| !a.is_empty())
    }
}

/// World coordinates of a death
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

/// A hero death
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroDeath {
    pub game_time: f64,
    #[serde(default)]
    pub tick: u32,
    pub killer: String,
    pub victim: String,
    #[serde(default)]
    pub killer_is_hero: bool,
    /// Ability that landed the killing blow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<MapPosition>,
    /// Human readable location, filled in by the map classifier upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
}
