//! Kill streaks: several kills by one hero inside the streak window.
//!
//! The window is measured from the first kill of the streak, not from the
//! previous kill, so a chain of kills 10s apart still breaks after 18s.

use clash_types::formatting::format_game_time;
use clash_types::{KillStreak, StreakTier};
use hashbrown::HashMap;

use crate::combat_log::HeroDeath;
use crate::game_data::clean_hero_name;

pub(crate) fn detect_kill_streaks(deaths: &[HeroDeath], window_secs: f64) -> Vec<KillStreak> {
    // Tower and creep kills never count toward a streak
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut kills_by_hero: Vec<(&str, Vec<&HeroDeath>)> = Vec::new();
    for death in deaths.iter().filter(|d| d.killer_is_hero) {
        let killer = clean_hero_name(&death.killer);
        let slot = *index.entry(killer).or_insert_with(|| {
            kills_by_hero.push((killer, Vec::new()));
            kills_by_hero.len() - 1
        });
        kills_by_hero[slot].1.push(death);
    }

    let mut streaks = Vec::new();
    for (hero, mut kills) in kills_by_hero {
        if kills.len() < 2 {
            continue;
        }
        kills.sort_by(|a, b| a.game_time.total_cmp(&b.game_time));

        let mut streak_start = 0;
        for i in 1..kills.len() {
            if kills[i].game_time - kills[streak_start].game_time > window_secs {
                push_streak(&mut streaks, hero, &kills[streak_start..i]);
                streak_start = i;
            }
        }
        push_streak(&mut streaks, hero, &kills[streak_start..]);
    }

    streaks.sort_by(|a, b| a.game_time.total_cmp(&b.game_time));
    streaks
}

/// Record the streak if it reaches at least a double kill
fn push_streak(streaks: &mut Vec<KillStreak>, hero: &str, kills: &[&HeroDeath]) {
    let Some(streak_type) = StreakTier::from_kills(kills.len()) else {
        return;
    };
    let Some(last_kill) = kills.last() else {
        return;
    };

    tracing::debug!(hero, kills = kills.len(), tier = %streak_type, "kill streak");

    streaks.push(KillStreak {
        game_time: last_kill.game_time,
        game_time_str: format_game_time(last_kill.game_time),
        hero: hero.to_string(),
        streak_type,
        kills: kills.len(),
        victims: kills
            .iter()
            .map(|k| clean_hero_name(&k.victim).to_string())
            .collect(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlights::test_fixtures::kill;

    const WINDOW: f64 = 18.0;

    #[test]
    fn test_double_kill() {
        let deaths = vec![kill(600.0, "medusa", "antimage"), kill(605.0, "medusa", "lion")];

        let streaks = detect_kill_streaks(&deaths, WINDOW);

        assert_eq!(streaks.len(), 1);
        assert_eq!(streaks[0].hero, "medusa");
        assert_eq!(streaks[0].streak_type, StreakTier::DoubleKill);
        assert_eq!(streaks[0].kills, 2);
        assert_eq!(streaks[0].victims, vec!["antimage", "lion"]);
        assert_eq!(streaks[0].game_time, 605.0);
        assert_eq!(streaks[0].game_time_str, "10:05");
    }

    #[test]
    fn test_rampage() {
        let deaths: Vec<_> = (0..5)
            .map(|i| kill(600.0 + f64::from(i) * 3.0, "medusa", &format!("hero_{i}")))
            .collect();

        let streaks = detect_kill_streaks(&deaths, WINDOW);

        assert_eq!(streaks.len(), 1);
        assert_eq!(streaks[0].streak_type, StreakTier::Rampage);
        assert_eq!(streaks[0].kills, 5);
        assert_eq!(streaks[0].game_time, 612.0);
    }

    #[test]
    fn test_more_than_five_kills_still_rampage() {
        let deaths: Vec<_> = (0..7)
            .map(|i| kill(600.0 + f64::from(i), "medusa", &format!("hero_{i}")))
            .collect();

        let streaks = detect_kill_streaks(&deaths, WINDOW);

        assert_eq!(streaks.len(), 1);
        assert_eq!(streaks[0].streak_type, StreakTier::Rampage);
        assert_eq!(streaks[0].kills, 7);
    }

    #[test]
    fn test_kills_too_far_apart() {
        let deaths = vec![kill(600.0, "medusa", "antimage"), kill(620.0, "medusa", "lion")];

        assert!(detect_kill_streaks(&deaths, WINDOW).is_empty());
    }

    #[test]
    fn test_exactly_at_window_edge_counts() {
        let deaths = vec![kill(600.0, "medusa", "antimage"), kill(618.0, "medusa", "lion")];

        assert_eq!(detect_kill_streaks(&deaths, WINDOW).len(), 1);
    }

    #[test]
    fn test_window_measured_from_streak_start() {
        // 10s gaps: third kill is 20s after the first, so it opens a new streak
        let deaths = vec![
            kill(600.0, "medusa", "antimage"),
            kill(610.0, "medusa", "lion"),
            kill(620.0, "medusa", "lina"),
            kill(625.0, "medusa", "axe"),
        ];

        let streaks = detect_kill_streaks(&deaths, WINDOW);

        assert_eq!(streaks.len(), 2);
        assert_eq!(streaks[0].victims, vec!["antimage", "lion"]);
        assert_eq!(streaks[1].victims, vec!["lina", "axe"]);
        assert_eq!(streaks[1].game_time, 625.0);
    }

    #[test]
    fn test_lone_trailing_kill_discarded() {
        let deaths = vec![
            kill(600.0, "medusa", "antimage"),
            kill(601.0, "medusa", "lion"),
            kill(640.0, "medusa", "lina"),
        ];

        let streaks = detect_kill_streaks(&deaths, WINDOW);

        assert_eq!(streaks.len(), 1);
        assert_eq!(streaks[0].kills, 2);
    }

    #[test]
    fn test_non_hero_killers_ignored() {
        let mut tower = kill(600.0, "npc_dota_goodguys_tower1_mid", "antimage");
        tower.killer_is_hero = false;
        let mut tower_again = kill(602.0, "npc_dota_goodguys_tower1_mid", "lion");
        tower_again.killer_is_hero = false;

        assert!(detect_kill_streaks(&[tower, tower_again], WINDOW).is_empty());
    }

    #[test]
    fn test_unsorted_input_and_prefixed_names() {
        let deaths = vec![
            kill(606.0, "npc_dota_hero_medusa", "npc_dota_hero_lion"),
            kill(600.0, "medusa", "antimage"),
            kill(603.0, "npc_dota_hero_medusa", "lina"),
        ];

        let streaks = detect_kill_streaks(&deaths, WINDOW);

        assert_eq!(streaks.len(), 1);
        assert_eq!(streaks[0].streak_type, StreakTier::TripleKill);
        assert_eq!(streaks[0].victims, vec!["antimage", "lina", "lion"]);
    }

    #[test]
    fn test_streaks_across_killers_sorted_by_time() {
        let deaths = vec![
            kill(700.0, "medusa", "antimage"),
            kill(701.0, "medusa", "lion"),
            kill(650.0, "invoker", "axe"),
            kill(652.0, "invoker", "sven"),
        ];

        let streaks = detect_kill_streaks(&deaths, WINDOW);

        assert_eq!(streaks.len(), 2);
        assert_eq!(streaks[0].hero, "invoker");
        assert_eq!(streaks[1].hero, "medusa");
    }
}
