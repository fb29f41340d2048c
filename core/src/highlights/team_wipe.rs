//! Team wipes (aces): every member of one roster dead within the fight.

use std::collections::HashSet as StdHashSet;

use clash_types::formatting::format_game_time;
use clash_types::{Team, TeamWipe};
use hashbrown::HashSet;

use crate::combat_log::HeroDeath;
use crate::game_data::clean_hero_name;

pub(crate) fn detect_team_wipes(
    deaths: &[HeroDeath],
    radiant: &StdHashSet<String>,
    dire: &StdHashSet<String>,
    roster_size: usize,
) -> Vec<TeamWipe> {
    [(Team::Radiant, radiant), (Team::Dire, dire)]
        .into_iter()
        .filter_map(|(team, roster)| detect_wipe(deaths, team, roster, roster_size))
        .collect()
}

/// Find the point where `roster_size` distinct members of `roster` have died.
///
/// A hero is counted once no matter how many death records it has; the
/// walk stops at the death that completes the wipe.
fn detect_wipe(
    deaths: &[HeroDeath],
    team: Team,
    roster: &StdHashSet<String>,
    roster_size: usize,
) -> Option<TeamWipe> {
    let roster: HashSet<&str> = roster.iter().map(|h| clean_hero_name(h)).collect();

    let mut team_deaths: Vec<&HeroDeath> = deaths
        .iter()
        .filter(|d| roster.contains(clean_hero_name(&d.victim)))
        .collect();

    let distinct: HashSet<&str> = team_deaths
        .iter()
        .map(|d| clean_hero_name(&d.victim))
        .collect();
    if distinct.len() < roster_size {
        return None;
    }

    team_deaths.sort_by(|a, b| a.game_time.total_cmp(&b.game_time));

    let mut unique_victims: HashSet<&str> = HashSet::new();
    let mut first_death: Option<&HeroDeath> = None;
    let mut last_death: Option<&HeroDeath> = None;
    for death in team_deaths {
        if unique_victims.insert(clean_hero_name(&death.victim)) {
            first_death.get_or_insert(death);
            last_death = Some(death);
        }
        if unique_victims.len() >= roster_size {
            break;
        }
    }

    if unique_victims.len() < roster_size {
        return None;
    }
    let (first_death, last_death) = (first_death?, last_death?);
    let duration = last_death.game_time - first_death.game_time;

    tracing::debug!(team = %team, duration, game_time = last_death.game_time, "team wipe");

    Some(TeamWipe {
        game_time: last_death.game_time,
        game_time_str: format_game_time(last_death.game_time),
        team_wiped: team,
        duration,
        killer_team: team.opponent(),
    })
}
