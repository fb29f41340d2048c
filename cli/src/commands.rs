use std::io::Write;
use std::path::Path;

use clash_core::game_data::tracked_abilities;
use clash_core::{ConfigError, FightAnalyzer, InputError, load_fights, load_settings};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Analyze every fight in `input` and print the reports as JSON
pub fn analyze(input: &Path, config: Option<&Path>, compact: bool) -> Result<(), CommandError> {
    let settings = load_settings(config)?;
    let fights = load_fights(input)?;

    let analyzer = FightAnalyzer::with_settings(settings);
    let reports = analyzer.analyze_fights(&fights);

    let highlighted = reports.iter().filter(|r| !r.highlights.is_empty()).count();
    tracing::info!(fights = reports.len(), highlighted, "analysis complete");

    let json = if compact {
        serde_json::to_string(&reports)?
    } else {
        serde_json::to_string_pretty(&reports)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;
    Ok(())
}

/// Print the tracked abilities and their hero thresholds
pub fn catalog() -> Result<(), CommandError> {
    let mut stdout = std::io::stdout().lock();
    for tracked in tracked_abilities() {
        writeln!(
            stdout,
            "{:<40} {:<24} {}",
            tracked.id, tracked.info.display_name, tracked.info.min_heroes
        )?;
    }
    stdout.flush()?;
    Ok(())
}
