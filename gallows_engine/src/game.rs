//! Game Module
//!
//! Holds the state of a single round: the secret word, the letters guessed so far,
//! and how many of those guesses missed.
use std::collections::HashSet;

use log::debug;
use thiserror::Error;
use variantly::Variantly;

/// Number of misses allowed before the round is lost, unless configured otherwise.
pub const DEFAULT_MAX_ERRORS: usize = 6;

/// Contract violations detected by [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result of submitting a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    AlreadyGuessed,
}

/// Where a round stands after the most recent guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// State of one round of play.
#[derive(Debug, Clone)]
pub struct GameState {
    secret_word: Vec<char>,
    guessed_letters: HashSet<char>,
    error_count: usize,
    max_errors: usize,
}

impl GameState {
    /// Start a round with the default error threshold.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `word` is empty or has non-alphabetic characters.
    pub fn new(word: &str) -> Result<GameState, GameError> {
        GameState::with_max_errors(word, DEFAULT_MAX_ERRORS)
    }

    /// Start a round that is lost after `max_errors` misses.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a bad word or a zero threshold.
    pub fn with_max_errors(word: &str, max_errors: usize) -> Result<GameState, GameError> {
        if max_errors == 0 {
            return Err(GameError::InvalidArgument("max_errors must be positive".into()));
        }
        Ok(GameState {
            secret_word: normalize_word(word)?,
            guessed_letters: HashSet::new(),
            error_count: 0,
            max_errors,
        })
    }

    /// Begin a new round with `new_word`, keeping the error threshold.
    ///
    /// On error the current round is left untouched.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `new_word` is empty or has non-alphabetic characters.
    pub fn reset(&mut self, new_word: &str) -> Result<(), GameError> {
        self.secret_word = normalize_word(new_word)?;
        self.guessed_letters.clear();
        self.error_count = 0;
        Ok(())
    }

    /// Submit one letter (case-insensitive) and report how it fared.
    ///
    /// Repeating a letter is a no-op that returns `AlreadyGuessed`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a non-alphabetic letter, or if the round is already over.
    pub fn submit_guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if !letter.is_alphabetic() {
            return Err(GameError::InvalidArgument(format!("'{letter}' is not a letter")));
        }
        let letter = to_upper(letter);
        if self.guessed_letters.contains(&letter) {
            debug!("'{letter}' was already guessed");
            return Ok(GuessOutcome::AlreadyGuessed);
        }
        if self.is_over() {
            return Err(GameError::InvalidArgument("round is already over".into()));
        }

        self.guessed_letters.insert(letter);
        if self.secret_word.contains(&letter) {
            debug!("'{letter}' is in the word");
            Ok(GuessOutcome::Correct)
        } else {
            self.error_count += 1;
            debug!("'{letter}' missed ({}/{})", self.error_count, self.max_errors);
            Ok(GuessOutcome::Incorrect)
        }
    }

    /// True once every letter of the word has been guessed.
    pub fn is_won(&self) -> bool {
        self.secret_word.iter().all(|ch| self.guessed_letters.contains(ch))
    }

    /// True once the misses reach the threshold.
    pub fn is_lost(&self) -> bool {
        self.error_count >= self.max_errors
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Round status, checking for a win before a loss.
    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.is_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn secret_word(&self) -> String {
        self.secret_word.iter().collect()
    }

    pub fn guessed_letters(&self) -> &HashSet<char> {
        &self.guessed_letters
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    /// Misses left before the round is lost.
    pub fn remaining_errors(&self) -> usize {
        self.max_errors.saturating_sub(self.error_count)
    }

    /// The word with unguessed letters replaced by `_`, space separated: `A P P _ _`.
    pub fn masked_word(&self) -> String {
        self.secret_word
            .iter()
            .map(|ch| if self.guessed_letters.contains(ch) { *ch } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Incorrect guesses in alphabetical order.
    pub fn wrong_letters(&self) -> Vec<char> {
        let mut wrong = self
            .guessed_letters
            .iter()
            .filter(|ch| !self.secret_word.contains(*ch))
            .copied()
            .collect::<Vec<_>>();
        wrong.sort_unstable();
        wrong
    }
}

/// Uppercase a single letter. Letters with multi-char uppercase forms are left as-is.
pub(crate) fn to_upper(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

fn normalize_word(word: &str) -> Result<Vec<char>, GameError> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(GameError::InvalidArgument("secret word is empty".into()));
    }
    if let Some(bad) = trimmed.chars().find(|ch| !ch.is_alphabetic()) {
        return Err(GameError::InvalidArgument(format!(
            "secret word contains non-letter '{bad}'"
        )));
    }
    Ok(trimmed.chars().map(to_upper).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, letters: &str) -> Vec<GuessOutcome> {
        letters
            .chars()
            .map(|ch| state.submit_guess(ch).expect("valid guess"))
            .collect()
    }

    #[test]
    fn apple_scenario_wins_with_one_error() {
        let mut state = GameState::new("apple").unwrap();
        let outcomes = play(&mut state, "APZLE");
        assert_eq!(
            outcomes,
            vec![
                GuessOutcome::Correct,
                GuessOutcome::Correct,
                GuessOutcome::Incorrect,
                GuessOutcome::Correct,
                GuessOutcome::Correct,
            ]
        );
        assert!(state.is_won());
        assert!(!state.is_lost());
        assert_eq!(state.error_count(), 1);
        assert_eq!(state.status(), RoundStatus::Won);
    }

    #[test]
    fn cat_scenario_loses_after_six_misses() {
        let mut state = GameState::new("CAT").unwrap();
        play(&mut state, "XYZQWV");
        assert_eq!(state.error_count(), 6);
        assert!(state.is_lost());
        assert!(!state.is_won());
        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.remaining_errors(), 0);
    }

    #[test]
    fn repeated_guess_is_case_insensitive_noop() {
        let mut state = GameState::new("CAT").unwrap();
        assert_eq!(state.submit_guess('z').unwrap(), GuessOutcome::Incorrect);
        assert_eq!(state.submit_guess('Z').unwrap(), GuessOutcome::AlreadyGuessed);
        assert_eq!(state.submit_guess('z').unwrap(), GuessOutcome::AlreadyGuessed);
        assert_eq!(state.error_count(), 1);
        assert_eq!(state.guessed_letters().len(), 1);
    }

    #[test]
    fn error_count_grows_by_at_most_one_per_guess() {
        let mut state = GameState::new("RUSTACEAN").unwrap();
        let mut last = state.error_count();
        for ch in "QRQZSXTY".chars() {
            let _ = state.submit_guess(ch).unwrap();
            let now = state.error_count();
            assert!(now >= last && now - last <= 1);
            last = now;
        }
    }

    #[test]
    fn non_letter_guess_is_rejected_without_change() {
        let mut state = GameState::new("CAT").unwrap();
        assert!(matches!(state.submit_guess('3'), Err(GameError::InvalidArgument(_))));
        assert!(state.guessed_letters().is_empty());
        assert_eq!(state.error_count(), 0);
    }

    #[test]
    fn guess_after_loss_is_rejected_and_count_stays_at_max() {
        let mut state = GameState::with_max_errors("CAT", 2).unwrap();
        play(&mut state, "XY");
        assert!(state.is_lost());
        assert!(state.submit_guess('Z').is_err());
        assert_eq!(state.error_count(), 2);
        assert_eq!(state.guessed_letters().len(), 2);
    }

    #[test]
    fn guess_after_win_is_rejected() {
        let mut state = GameState::new("AA").unwrap();
        play(&mut state, "A");
        assert!(state.is_won());
        assert!(state.submit_guess('B').is_err());
        assert_eq!(state.error_count(), 0);
    }

    #[test]
    fn bad_words_and_thresholds_are_rejected() {
        assert!(GameState::new("").is_err());
        assert!(GameState::new("   ").is_err());
        assert!(GameState::new("hello world").is_err());
        assert!(GameState::new("r2d2").is_err());
        assert!(GameState::with_max_errors("CAT", 0).is_err());
    }

    #[test]
    fn reset_matches_fresh_instance() {
        let mut reused = GameState::new("CAT").unwrap();
        play(&mut reused, "CXYZ");
        reused.reset("banana").unwrap();
        let mut fresh = GameState::new("banana").unwrap();

        assert_eq!(reused.error_count(), 0);
        assert!(reused.guessed_letters().is_empty());
        for ch in "BQNAZ".chars() {
            assert_eq!(reused.submit_guess(ch), fresh.submit_guess(ch));
            assert_eq!(reused.error_count(), fresh.error_count());
            assert_eq!(reused.masked_word(), fresh.masked_word());
        }
        assert_eq!(reused.is_won(), fresh.is_won());
    }

    #[test]
    fn failed_reset_keeps_current_round() {
        let mut state = GameState::new("CAT").unwrap();
        play(&mut state, "C");
        assert!(state.reset("").is_err());
        assert_eq!(state.secret_word(), "CAT");
        assert!(state.guessed_letters().contains(&'C'));
    }

    #[test]
    fn masked_and_wrong_letters_reflect_guesses() {
        let mut state = GameState::new("apple").unwrap();
        play(&mut state, "pzb");
        assert_eq!(state.masked_word(), "_ P P _ _");
        assert_eq!(state.wrong_letters(), vec!['B', 'Z']);
        assert_eq!(state.secret_word(), "APPLE");
    }

    #[test]
    fn won_implies_all_word_letters_guessed() {
        let mut state = GameState::new("LEVEL").unwrap();
        play(&mut state, "LEV");
        assert!(state.is_won());
        assert!("LEVEL".chars().all(|ch| state.guessed_letters().contains(&ch)));
    }
}
