#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Gallows **
//! Guess the word before the gallows are finished.

use gallows_engine::{InputManager, RandomWords, View, load_game_data, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Gallows {}...", gallows_engine::GALLOWS_VERSION);
    let data = load_game_data();
    info!("{} candidate words available.", data.words.len());

    let mut words = RandomWords::new(data.words);
    let mut view = View::new().with_clear_screen(data.config.clear_screen);
    let mut input = InputManager::new();

    info!("Starting the game!");
    run_repl(&data.config, &mut words, &mut view, &mut input).context("while running the game")
}
