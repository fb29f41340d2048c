use phf::phf_map;

use super::AbilityInfo;

const fn ability(display_name: &'static str, min_heroes: usize) -> AbilityInfo {
    AbilityInfo {
        display_name,
        min_heroes,
    }
}

/// Teamfight abilities worth highlighting, with the number of distinct
/// heroes they must catch to count.
pub static TEAMFIGHT_ABILITIES: phf::Map<&'static str, AbilityInfo> = phf_map! {
    // Stuns and disables
    "faceless_void_chronosphere" => ability("Chronosphere", 2),
    "enigma_black_hole" => ability("Black Hole", 2),
    "magnataur_reverse_polarity" => ability("Reverse Polarity", 2),
    "tidehunter_ravage" => ability("Ravage", 2),
    "earthshaker_echo_slam" => ability("Echo Slam", 3),
    "treant_overgrowth" => ability("Overgrowth", 2),
    "warlock_rain_of_chaos" => ability("Chaotic Offering", 2),
    "elder_titan_earth_splitter" => ability("Earth Splitter", 2),
    "magnus_skewer" => ability("Skewer", 2),
    "dark_seer_wall_of_replica" => ability("Wall of Replica", 2),
    "phoenix_supernova" => ability("Supernova", 2),
    "disruptor_static_storm" => ability("Static Storm", 2),
    "keeper_of_the_light_will_o_wisp" => ability("Will-O-Wisp", 2),
    "winter_wyvern_winters_curse" => ability("Winter's Curse", 2),
    "jakiro_ice_path" => ability("Ice Path", 2),
    "puck_dream_coil" => ability("Dream Coil", 2),
    "sand_king_epicenter" => ability("Epicenter", 2),
    "sand_king_burrowstrike" => ability("Burrowstrike", 2),
    "slardar_slithereen_crush" => ability("Slithereen Crush", 2),
    "centaur_hoof_stomp" => ability("Hoof Stomp", 2),
    "axe_berserkers_call" => ability("Berserker's Call", 2),
    "mars_arena_of_blood" => ability("Arena of Blood", 2),
    "mars_gods_rebuke" => ability("God's Rebuke", 2),
    "legion_commander_overwhelming_odds" => ability("Overwhelming Odds", 3),
    "void_spirit_resonant_pulse" => ability("Resonant Pulse", 2),
    "primal_beast_pulverize" => ability("Pulverize", 2),
    "primal_beast_onslaught" => ability("Onslaught", 2),

    // Big damage ultimates
    "crystal_maiden_freezing_field" => ability("Freezing Field", 2),
    "witch_doctor_death_ward" => ability("Death Ward", 2),
    "gyrocopter_call_down" => ability("Call Down", 2),
    "invoker_emp" => ability("EMP", 2),
    "invoker_chaos_meteor" => ability("Chaos Meteor", 2),
    "invoker_deafening_blast" => ability("Deafening Blast", 2),
    "kunkka_ghostship" => ability("Ghostship", 2),
    "kunkka_torrent_storm" => ability("Torrent Storm", 2),
    "leshrac_pulse_nova" => ability("Pulse Nova", 2),
    "lich_chain_frost" => ability("Chain Frost", 2),
    "lion_finger_of_death" => ability("Finger of Death", 2), // Aghs multi-target
    "lina_laguna_blade" => ability("Laguna Blade", 2), // Aghs multi-target
    "luna_eclipse" => ability("Eclipse", 2),
    "medusa_stone_gaze" => ability("Stone Gaze", 2),
    "necrophos_reapers_scythe" => ability("Reaper's Scythe", 1),
    "pugna_life_drain" => ability("Life Drain", 1),
    "queen_of_pain_sonic_wave" => ability("Sonic Wave", 2),
    "shadow_fiend_requiem_of_souls" => ability("Requiem of Souls", 2),
    "skywrath_mage_mystic_flare" => ability("Mystic Flare", 1),
    "spectre_haunt" => ability("Haunt", 3),
    "storm_spirit_electric_vortex" => ability("Electric Vortex", 2), // Aghs
    "techies_remote_mines" => ability("Remote Mines", 2),
    "tinker_march_of_the_machines" => ability("March of the Machines", 2),
    "venomancer_poison_nova" => ability("Poison Nova", 2),
    "zeus_thundergods_wrath" => ability("Thundergod's Wrath", 3),

    // Silences
    "death_prophet_silence" => ability("Silence", 2),
    "silencer_global_silence" => ability("Global Silence", 3),
    "drow_ranger_gust" => ability("Gust", 2),
    "night_stalker_crippling_fear" => ability("Crippling Fear", 2),

    // Saves, tracked on a single target
    "dazzle_shallow_grave" => ability("Shallow Grave", 1),
    "oracle_false_promise" => ability("False Promise", 1),
    "abaddon_borrowed_time" => ability("Borrowed Time", 1),
    "omniknight_guardian_angel" => ability("Guardian Angel", 1),
};
