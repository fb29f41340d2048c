//! Fight highlight extraction
//!
//! Turns one fight's combat log and death list into [`FightHighlights`]:
//!
//! - **Multi-hero abilities**: tracked abilities catching several heroes at once
//! - **Kill streaks**: double kill through rampage
//! - **Team wipes**: all five heroes of one side dead
//! - **Initiation**: the hero and ability that opened the fight
//!
//! The four detectors read the same inputs and never see each other's
//! output. Every call is a pure function of its arguments, so one
//! [`FightAnalyzer`] can serve any number of threads.

mod initiation;
mod kill_streak;
mod multi_hero;
mod team_wipe;

#[cfg(test)]
pub(crate) mod test_fixtures;

use std::collections::HashSet;

use clash_types::formatting::format_game_time;
use clash_types::{AnalyzerSettings, FightHighlights, FightReport};
use rayon::prelude::*;

use crate::combat_log::{CombatLogEvent, HeroDeath};
use crate::input::FightInput;

#[derive(Debug, Clone, Default)]
pub struct FightAnalyzer {
    settings: AnalyzerSettings,
}

impl FightAnalyzer {
    /// Analyzer using the in-game rule constants
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Extract highlights from one fight.
    ///
    /// Team wipes are only looked for when both rosters are supplied.
    /// Inputs may be unsorted or contain duplicates; nothing here fails.
    pub fn analyze_fight(
        &self,
        events: &[CombatLogEvent],
        deaths: &[HeroDeath],
        radiant_heroes: Option<&HashSet<String>>,
        dire_heroes: Option<&HashSet<String>>,
    ) -> FightHighlights {
        tracing::debug!(events = events.len(), deaths = deaths.len(), "analyzing fight");

        let multi_hero_abilities =
            multi_hero::detect_multi_hero_abilities(events, self.settings.window_buckets_per_sec);
        let kill_streaks = kill_streak::detect_kill_streaks(deaths, self.settings.streak_window_secs);

        let team_wipes = match (radiant_heroes, dire_heroes) {
            (Some(radiant), Some(dire)) if !radiant.is_empty() && !dire.is_empty() => {
                team_wipe::detect_team_wipes(deaths, radiant, dire, self.settings.wipe_roster_size)
            }
            _ => Vec::new(),
        };

        let (fight_initiator, initiation_ability) = match initiation::detect_initiation(events) {
            Some(init) => (Some(init.hero), Some(init.ability_display)),
            None => (None, None),
        };

        FightHighlights {
            multi_hero_abilities,
            kill_streaks,
            team_wipes,
            fight_initiator,
            initiation_ability,
        }
    }

    /// Analyze a fight handed over by the upstream detector, keeping its metadata
    pub fn report(&self, fight: &FightInput) -> FightReport {
        let highlights = self.analyze_fight(
            &fight.events,
            &fight.deaths,
            fight.radiant_heroes.as_ref(),
            fight.dire_heroes.as_ref(),
        );

        FightReport {
            fight_id: fight.fight_id.clone(),
            start_time_str: fight.start_time.map(format_game_time),
            end_time_str: fight.end_time.map(format_game_time),
            total_deaths: fight.deaths.len(),
            is_teamfight: fight.deaths.len() >= self.settings.teamfight_min_deaths,
            highlights,
        }
    }

    /// Analyze independent fights in parallel. Output order matches input order.
    pub fn analyze_fights(&self, fights: &[FightInput]) -> Vec<FightReport> {
        fights.par_iter().map(|fight| self.report(fight)).collect()
    }
}
