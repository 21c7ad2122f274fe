//! Game loop.
//!
//! Each turn renders the board, reads a line, and turns it into either a
//! command or a guess. Rounds repeat until the player declines to play again.

pub mod input;

use anyhow::{Context, Result};
use log::{debug, info};
use variantly::Variantly;

use crate::command::{Command, is_yes, parse_command};
use crate::game::{GameState, RoundStatus};
use crate::loader::config::GameConfig;
use crate::style::GameStyle;
use crate::validate::validate_guess;
use crate::view::{Renderer, ViewItem};
use crate::words::WordSource;

pub use input::{InputEvent, InputManager, InputSource};

/// Control flow signal used by handlers to leave the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// How a round came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum RoundEnd {
    Won,
    Lost,
    /// The player quit, or input ran out.
    Quit,
}

/// Run rounds until the player quits or declines another round.
///
/// Each round draws a word from `words`; the same [`GameState`] is reset between rounds.
///
/// # Errors
/// - The word source has no word to give, or gives one that isn't a valid secret word.
/// - Input can't be read.
pub fn run_repl<W, R, I>(config: &GameConfig, words: &mut W, view: &mut R, input: &mut I) -> Result<()>
where
    W: WordSource + ?Sized,
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    let word = words.next_word().context("while choosing a word for the first round")?;
    let mut state = GameState::with_max_errors(&word, config.max_errors).context("while starting the first round")?;
    let mut round = 1;
    view.push(ViewItem::Banner);

    loop {
        info!("================> BEGIN ROUND {round} <================");
        debug!("secret word is {}", state.secret_word());

        let end = play_round(&mut state, view, input)?;
        info!(
            "round {round} ended: {end:?} with {}/{} misses",
            state.error_count(),
            state.max_errors()
        );
        if end.is_quit() {
            break;
        }

        if let ReplControl::Quit = play_again_handler(view, input)? {
            break;
        }

        let word = words.next_word().context("while choosing a word for the next round")?;
        state.reset(&word).context("while starting the next round")?;
        round += 1;
    }
    Ok(())
}

/// Play one round to its end.
///
/// Rejected input is reported and the player is asked again. A win is checked
/// before a loss after every accepted guess.
///
/// # Errors
/// Returns an error if input can't be read.
pub fn play_round<R, I>(state: &mut GameState, view: &mut R, input: &mut I) -> Result<RoundEnd>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    view.push(ViewItem::board(state));
    view.flush();

    loop {
        let prompt = format!("Guess a letter ({} left)> ", state.remaining_errors())
            .prompt_style()
            .to_string();
        let line = match input.read_line(&prompt).context("while reading a guess")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => {
                view.push(ViewItem::Goodbye);
                view.flush();
                return Ok(RoundEnd::Quit);
            },
        };

        match parse_command(&line) {
            Command::Quit => {
                view.push(ViewItem::Goodbye);
                view.flush();
                return Ok(RoundEnd::Quit);
            },
            Command::Help => {
                view.push(ViewItem::Help);
                view.flush();
            },
            Command::Guess(raw) => {
                if let Some(end) = guess_handler(state, view, &raw)? {
                    view.flush();
                    return Ok(end);
                }
                view.flush();
            },
        }
    }
}

/// Validate and apply one guess, queueing its feedback. Returns the round's end, if reached.
///
/// # Errors
/// Returns an error if a validated letter is still refused by the game state.
pub fn guess_handler<R: Renderer + ?Sized>(state: &mut GameState, view: &mut R, raw: &str) -> Result<Option<RoundEnd>> {
    let letter = match validate_guess(raw, state.guessed_letters()) {
        Ok(letter) => letter,
        Err(err) => {
            debug!("rejected input {raw:?}: {err}");
            view.push(ViewItem::InputRejected(err));
            return Ok(None);
        },
    };

    let outcome = state
        .submit_guess(letter)
        .with_context(|| format!("while submitting '{letter}'"))?;
    view.push(ViewItem::board(state));
    view.push(ViewItem::GuessResult { letter, outcome });

    match state.status() {
        RoundStatus::Won => {
            view.push(ViewItem::Won {
                word: state.secret_word(),
                errors: state.error_count(),
            });
            Ok(Some(RoundEnd::Won))
        },
        RoundStatus::Lost => {
            view.push(ViewItem::Lost {
                word: state.secret_word(),
            });
            Ok(Some(RoundEnd::Lost))
        },
        RoundStatus::InProgress => Ok(None),
    }
}

/// Ask whether to start another round. Anything but a yes ends the session.
///
/// # Errors
/// Returns an error if input can't be read.
pub fn play_again_handler<R, I>(view: &mut R, input: &mut I) -> Result<ReplControl>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    let prompt = "Play again? [y/N] ".prompt_style().to_string();
    let answer = input.read_line(&prompt).context("while asking to play again")?;
    if let InputEvent::Line(line) = &answer
        && is_yes(line)
    {
        return Ok(ReplControl::Continue);
    }
    view.push(ViewItem::Goodbye);
    view.flush();
    Ok(ReplControl::Quit)
}
