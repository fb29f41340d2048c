pub mod combat_log;
pub mod config;
pub mod game_data;
pub mod highlights;
pub mod input;

// Re-exports for convenience
pub use clash_types::{AnalyzerSettings, FightHighlights, FightReport};
pub use combat_log::{CombatEventKind, CombatLogEvent, HeroDeath, MapPosition};
pub use config::{ConfigError, load_settings};
pub use highlights::FightAnalyzer;
pub use input::{FightInput, InputError, load_fights, parse_fights};
