//! Fight input loading
//!
//! The replay parser and fight detector run upstream; they hand over a
//! JSON file holding either one fight or an array of fights.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combat_log::{CombatLogEvent, HeroDeath};

/// One fight's worth of parsed data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FightInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fight_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub events: Vec<CombatLogEvent>,
    #[serde(default)]
    pub deaths: Vec<HeroDeath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiant_heroes: Option<HashSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dire_heroes: Option<HashSet<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FightFile {
    Many(Vec<FightInput>),
    One(Box<FightInput>),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid fight data in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parse fight JSON: a single fight object or an array of them
pub fn parse_fights(json: &str) -> Result<Vec<FightInput>, serde_json::Error> {
    Ok(match serde_json::from_str::<FightFile>(json)? {
        FightFile::Many(fights) => fights,
        FightFile::One(fight) => vec![*fight],
    })
}

/// Load fights from a JSON file
pub fn load_fights(path: &Path) -> Result<Vec<FightInput>, InputError> {
    let contents = fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let fights = parse_fights(&contents).map_err(|e| InputError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = ?path, fights = fights.len(), "loaded fight data");
    Ok(fights)
}
