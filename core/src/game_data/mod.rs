//! Static ability data
//!
//! Both tables are compiled in and read-only, so they are shared freely
//! across threads. Adding a new highlight ability means adding a row to
//! [`TEAMFIGHT_ABILITIES`] (and to [`ABILITY_MODIFIERS`] if the ability is
//! only visible through the modifier it applies).

mod abilities;
mod modifiers;

pub use abilities::TEAMFIGHT_ABILITIES;
pub use modifiers::ABILITY_MODIFIERS;

/// Prefix the replay puts in front of hero unit names
pub const HERO_PREFIX: &str = "npc_dota_hero_";

/// Catalog entry for a tracked teamfight ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityInfo {
    pub display_name: &'static str,
    /// Distinct heroes the ability must hit to be a highlight
    pub min_heroes: usize,
}

/// A raw identifier resolved to a catalog ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedAbility {
    pub id: &'static str,
    pub info: &'static AbilityInfo,
}

/// Look up an ability by its exact identifier
pub fn lookup_ability(id: &str) -> Option<TrackedAbility> {
    TEAMFIGHT_ABILITIES
        .get_entry(id)
        .map(|(id, info)| TrackedAbility { id: *id, info })
}

/// Resolve an ability or modifier identifier to a tracked ability.
///
/// Direct catalog hits win; otherwise the identifier is tried as a modifier
/// whose source ability must itself be in the catalog.
pub fn resolve_ability(id: &str) -> Option<TrackedAbility> {
    lookup_ability(id).or_else(|| {
        ABILITY_MODIFIERS
            .get(id)
            .and_then(|ability| lookup_ability(ability))
    })
}

/// Strip the hero unit prefix for display
pub fn clean_hero_name(name: &str) -> &str {
    name.strip_prefix(HERO_PREFIX).unwrap_or(name)
}

/// All tracked abilities, sorted by identifier
pub fn tracked_abilities() -> Vec<TrackedAbility> {
    let mut all: Vec<TrackedAbility> = TEAMFIGHT_ABILITIES
        .entries()
        .map(|(id, info)| TrackedAbility { id: *id, info })
        .collect();
    all.sort_by_key(|a| a.id);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_teamfight_abilities_tracked() {
        for id in [
            "faceless_void_chronosphere",
            "enigma_black_hole",
            "magnataur_reverse_polarity",
            "tidehunter_ravage",
            "jakiro_ice_path",
        ] {
            assert!(lookup_ability(id).is_some(), "{id} should be tracked");
        }
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(lookup_ability("earthshaker_echo_slam").unwrap().info.min_heroes, 3);
        assert_eq!(lookup_ability("jakiro_ice_path").unwrap().info.min_heroes, 2);
        assert_eq!(lookup_ability("dazzle_shallow_grave").unwrap().info.min_heroes, 1);
    }

    #[test]
    fn test_resolve_direct() {
        let tracked = resolve_ability("enigma_black_hole").unwrap();
        assert_eq!(tracked.id, "enigma_black_hole");
        assert_eq!(tracked.info.display_name, "Black Hole");
    }

    #[test]
    fn test_resolve_modifier_alias() {
        let tracked = resolve_ability("modifier_faceless_void_chronosphere_freeze").unwrap();
        assert_eq!(tracked.id, "faceless_void_chronosphere");
        assert_eq!(tracked.info.display_name, "Chronosphere");
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve_ability("antimage_blink").is_none());
        assert!(resolve_ability("modifier_antimage_blink").is_none());
        assert!(resolve_ability("").is_none());
        // Exact match only
        assert!(resolve_ability("Faceless_Void_Chronosphere").is_none());
        assert!(resolve_ability("faceless_void_chronosphere ").is_none());
    }

    #[test]
    fn test_every_modifier_targets_catalog_ability() {
        for (modifier, ability) in ABILITY_MODIFIERS.entries() {
            assert!(
                TEAMFIGHT_ABILITIES.contains_key(*ability),
                "{modifier} maps to untracked {ability}"
            );
        }
    }

    #[test]
    fn test_every_threshold_positive() {
        for tracked in tracked_abilities() {
            assert!(tracked.info.min_heroes >= 1, "{} has zero threshold", tracked.id);
        }
    }

    #[test]
    fn test_clean_hero_name() {
        assert_eq!(clean_hero_name("npc_dota_hero_antimage"), "antimage");
        assert_eq!(clean_hero_name("antimage"), "antimage");
        assert_eq!(clean_hero_name("npc_dota_badguys_tower1_mid"), "npc_dota_badguys_tower1_mid");
        assert_eq!(clean_hero_name(""), "");
    }

    #[test]
    fn test_tracked_abilities_sorted() {
        let all = tracked_abilities();
        assert_eq!(all.len(), TEAMFIGHT_ABILITIES.len());
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}
