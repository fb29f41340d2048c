//! Abilities that catch several heroes in one near-instant application.
//!
//! Hits are grouped per ability into fixed-width time buckets; a bucket
//! qualifies once its distinct hero targets reach the ability's threshold.

use clash_types::MultiHeroAbility;
use clash_types::formatting::format_game_time;
use hashbrown::{HashMap, HashSet};

use crate::combat_log::CombatLogEvent;
use crate::game_data::{TrackedAbility, clean_hero_name, resolve_ability};

/// Targets caught by one ability inside one time bucket.
/// Caster and time come from the first hit; later hits only add targets.
struct AbilityWindow<'a> {
    ability: TrackedAbility,
    caster: &'a str,
    game_time: f64,
    targets: HashSet<&'a str>,
}

/// Bucket index for a game time, `1 / buckets_per_sec` seconds wide
pub(crate) fn window_bucket(game_time: f64, buckets_per_sec: u32) -> i64 {
    (game_time * f64::from(buckets_per_sec)).floor() as i64
}

pub(crate) fn detect_multi_hero_abilities(
    events: &[CombatLogEvent],
    buckets_per_sec: u32,
) -> Vec<MultiHeroAbility> {
    // Windows stay in first-seen order so equal timestamps sort stably
    let mut index: HashMap<(&'static str, i64), usize> = HashMap::new();
    let mut windows: Vec<AbilityWindow<'_>> = Vec::new();

    for event in events {
        let Some(tracked) = event.ability_id().and_then(resolve_ability) else {
            continue;
        };
        if !event.target_is_hero {
            tracing::trace!(ability = tracked.id, target = %event.target, "ignoring non-hero target");
            continue;
        }

        let key = (tracked.id, window_bucket(event.game_time, buckets_per_sec));
        let slot = *index.entry(key).or_insert_with(|| {
            windows.push(AbilityWindow {
                ability: tracked,
                caster: clean_hero_name(&event.attacker),
                game_time: event.game_time,
                targets: HashSet::new(),
            });
            windows.len() - 1
        });
        windows[slot].targets.insert(clean_hero_name(&event.target));
    }

    let mut multi_hits: Vec<MultiHeroAbility> = windows
        .into_iter()
        .filter(|window| window.targets.len() >= window.ability.info.min_heroes)
        .map(|window| {
            let mut targets: Vec<String> =
                window.targets.into_iter().map(str::to_string).collect();
            targets.sort_unstable();

            tracing::debug!(
                ability = window.ability.id,
                caster = window.caster,
                hero_count = targets.len(),
                game_time = window.game_time,
                "multi-hero ability"
            );

            MultiHeroAbility {
                game_time: window.game_time,
                game_time_str: format_game_time(window.game_time),
                ability: window.ability.id.to_string(),
                ability_display: window.ability.info.display_name.to_string(),
                caster: window.caster.to_string(),
                hero_count: targets.len(),
                targets,
            }
        })
        .collect();

    multi_hits.sort_by(|a, b| a.game_time.total_cmp(&b.game_time));
    multi_hits
}
