//! clash - extract teamfight highlights from parsed fight data.
//!
//! Usage: clash analyze --input <fights.json> [--config <settings.toml>] [--compact]
//!
//! Logs go to stderr, or are appended to the file named by `CLASH_LOG_PATH`.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Extract teamfight highlights from parsed fight data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one fight or an array of fights from a JSON file
    Analyze {
        #[arg(short, long)]
        input: PathBuf,
        /// Settings file (defaults to the user config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// List tracked abilities
    Catalog,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("CLASH_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    // Fallback to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Analyze {
            input,
            config,
            compact,
        } => commands::analyze(input, config.as_deref(), *compact),
        Commands::Catalog => commands::catalog(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
