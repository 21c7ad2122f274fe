#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const GALLOWS_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod game;
pub mod loader;
pub mod repl;
pub mod stages;
pub mod style;
pub mod validate;
pub mod view;
pub mod words;

// Re-exports for convenience
pub use game::{GameError, GameState, GuessOutcome, RoundStatus};
pub use loader::load_game_data;
pub use repl::{InputEvent, InputManager, InputSource, RoundEnd, play_round, run_repl};
pub use validate::{InputError, validate_guess};
pub use view::{Renderer, View, ViewItem};
pub use words::{RandomWords, WordList, WordSource};
