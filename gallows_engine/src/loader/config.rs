//! Game settings and their loader.
//!
//! Settings come from `gallows.toml` in the data directory. Any field left out
//! of the file takes its default, and a missing or malformed file falls back
//! to [`GameConfig::default`].

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::game::DEFAULT_MAX_ERRORS;

/// Settings that shape a play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Misses allowed before a round is lost
    pub max_errors: usize,
    /// Clear the terminal before drawing the board
    pub clear_screen: bool,
    /// Word list file, relative to the data directory
    pub words_file: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
            clear_screen: true,
            words_file: "words.toml".to_string(),
        }
    }
}

/// Loads settings from a TOML file, falling back to defaults on error.
///
/// This function never fails. A zero `max_errors` is replaced by the default.
pub fn load_config(toml_path: &Path) -> GameConfig {
    let mut config = match try_load_config(toml_path) {
        Ok(config) => {
            info!("game settings loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load game settings from '{}': {:#}. Using defaults.",
                toml_path.display(),
                e
            );
            GameConfig::default()
        },
    };

    if config.max_errors == 0 {
        warn!("max_errors must be positive; using {DEFAULT_MAX_ERRORS}");
        config.max_errors = DEFAULT_MAX_ERRORS;
    }
    config
}

fn try_load_config(toml_path: &Path) -> Result<GameConfig> {
    let raw = fs::read_to_string(toml_path)
        .with_context(|| format!("reading game settings from '{}'", toml_path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing game settings from '{}'", toml_path.display()))
}
