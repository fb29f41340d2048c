//! Builders for analyzer tests

use crate::combat_log::{CombatEventKind, CombatLogEvent, HeroDeath};

fn tick_at(game_time: f64) -> u32 {
    (game_time.max(0.0) * 30.0) as u32
}

pub(crate) fn hero_event(
    kind: CombatEventKind,
    game_time: f64,
    attacker: &str,
    target: &str,
    ability: &str,
) -> CombatLogEvent {
    CombatLogEvent {
        kind,
        game_time,
        tick: tick_at(game_time),
        attacker: attacker.to_string(),
        attacker_is_hero: true,
        target: target.to_string(),
        target_is_hero: true,
        ability: Some(ability.to_string()),
        value: None,
        hit: None,
    }
}

/// Ability cast landing on a hero
pub(crate) fn ability_event(game_time: f64, attacker: &str, target: &str, ability: &str) -> CombatLogEvent {
    hero_event(CombatEventKind::Ability, game_time, attacker, target, ability)
}

/// Modifier applied to a hero
pub(crate) fn modifier_event(game_time: f64, attacker: &str, target: &str, modifier: &str) -> CombatLogEvent {
    hero_event(CombatEventKind::ModifierAdd, game_time, attacker, target, modifier)
}

/// Hero death with a hero killer
pub(crate) fn kill(game_time: f64, killer: &str, victim: &str) -> HeroDeath {
    HeroDeath {
        game_time,
        tick: tick_at(game_time),
        killer: killer.to_string(),
        victim: victim.to_string(),
        killer_is_hero: true,
        ..Default::default()
    }
}

pub(crate) fn roster(heroes: &[&str]) -> std::collections::HashSet<String> {
    heroes.iter().map(|h| h.to_string()).collect()
}

pub(crate) const RADIANT: [&str; 5] = ["antimage", "crystal_maiden", "lion", "earthshaker", "tidehunter"];
pub(crate) const DIRE: [&str; 5] = ["medusa", "disruptor", "naga_siren", "invoker", "mars"];
