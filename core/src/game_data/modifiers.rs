use phf::phf_map;

/// Modifiers that only show up when their ability lands, mapped back to
/// the ability that applies them.
pub static ABILITY_MODIFIERS: phf::Map<&'static str, &'static str> = phf_map! {
    "modifier_faceless_void_chronosphere_freeze" => "faceless_void_chronosphere",
    "modifier_enigma_black_hole_pull" => "enigma_black_hole",
    "modifier_magnataur_reverse_polarity" => "magnataur_reverse_polarity",
    "modifier_tidehunter_ravage" => "tidehunter_ravage",
    "modifier_treant_overgrowth" => "treant_overgrowth",
    "modifier_jakiro_ice_path_stun" => "jakiro_ice_path",
    "modifier_puck_dream_coil" => "puck_dream_coil",
    "modifier_sand_king_epicenter_slow" => "sand_king_epicenter",
    "modifier_axe_berserkers_call" => "axe_berserkers_call",
    "modifier_mars_arena_of_blood_leash" => "mars_arena_of_blood",
    "modifier_disruptor_static_storm" => "disruptor_static_storm",
    "modifier_medusa_stone_gaze_stone" => "medusa_stone_gaze",
    "modifier_winter_wyvern_winters_curse" => "winter_wyvern_winters_curse",
    "modifier_silencer_global_silence" => "silencer_global_silence",
};
