//! Loader utilities for the data a session needs before play starts.
//!
//! Settings and the word list are both TOML-backed and both fall back to
//! built-in defaults, so loading never stops the game from starting.

pub mod config;
pub mod words;

use self::config::{GameConfig, load_config};
use self::words::load_words;
use crate::data_paths::data_path;
use crate::words::WordList;
use log::info;

/// Settings and word list for one session.
#[derive(Debug, Clone)]
pub struct GameData {
    pub config: GameConfig,
    pub words: WordList,
}

/// Load settings from `gallows.toml`, then the word list it names.
pub fn load_game_data() -> GameData {
    let config = load_config(&data_path("gallows.toml"));
    info!(
        "settings: max_errors={}, clear_screen={}, words_file='{}'",
        config.max_errors, config.clear_screen, config.words_file
    );
    let words = load_words(&data_path(&config.words_file));
    GameData { config, words }
}
