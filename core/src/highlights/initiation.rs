//! Fight initiation: the first tracked ability to land on a hero.

use crate::combat_log::CombatLogEvent;
use crate::game_data::{clean_hero_name, resolve_ability};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Initiation {
    pub hero: String,
    pub ability_display: String,
}

pub(crate) fn detect_initiation(events: &[CombatLogEvent]) -> Option<Initiation> {
    let mut sorted: Vec<&CombatLogEvent> = events.iter().collect();
    sorted.sort_by(|a, b| a.game_time.total_cmp(&b.game_time));

    sorted.into_iter().find_map(|event| {
        if !event.kind.is_ability_application() || !event.target_is_hero {
            return None;
        }
        let tracked = event.ability_id().and_then(resolve_ability)?;

        tracing::debug!(
            hero = clean_hero_name(&event.attacker),
            ability = tracked.id,
            game_time = event.game_time,
            "fight initiation"
        );

        Some(Initiation {
            hero: clean_hero_name(&event.attacker).to_string(),
            ability_display: tracked.info.display_name.to_string(),
        })
    })
}
