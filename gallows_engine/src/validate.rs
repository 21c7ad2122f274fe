//! Input validation for guesses.
//!
//! Turns a raw line typed by the player into a single uppercase letter, or the
//! reason it can't be used. Nothing here touches game state.
use std::collections::HashSet;
use std::hash::BuildHasher;

use thiserror::Error;

use crate::game::to_upper;

/// Why a line of input was not accepted as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter exactly one letter")]
    EmptyOrWrongLength,
    #[error("that is not a letter")]
    NotALetter,
    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(char),
}

/// Validate a raw guess against the letters already tried.
///
/// Surrounding whitespace is ignored and the letter is returned uppercased.
///
/// # Errors
/// - `EmptyOrWrongLength` unless the trimmed input is exactly one character
/// - `NotALetter` if that character is not alphabetic
/// - `AlreadyGuessed` if it is already in `guessed`
pub fn validate_guess<S: BuildHasher>(raw: &str, guessed: &HashSet<char, S>) -> Result<char, InputError> {
    let mut chars = raw.trim().chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(ch), None) => ch,
        _ => return Err(InputError::EmptyOrWrongLength),
    };
    if !letter.is_alphabetic() {
        return Err(InputError::NotALetter);
    }
    let letter = to_upper(letter);
    if guessed.contains(&letter) {
        return Err(InputError::AlreadyGuessed(letter));
    }
    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_lowercase_letter_is_accepted() {
        assert_eq!(validate_guess(" a ", &HashSet::new()), Ok('A'));
        assert_eq!(validate_guess("q\n", &HashSet::new()), Ok('Q'));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let none = HashSet::new();
        assert_eq!(validate_guess("ab", &none), Err(InputError::EmptyOrWrongLength));
        assert_eq!(validate_guess("", &none), Err(InputError::EmptyOrWrongLength));
        assert_eq!(validate_guess("   ", &none), Err(InputError::EmptyOrWrongLength));
        assert_eq!(validate_guess("a b", &none), Err(InputError::EmptyOrWrongLength));
    }

    #[test]
    fn non_letters_are_rejected() {
        let none = HashSet::new();
        assert_eq!(validate_guess("3", &none), Err(InputError::NotALetter));
        assert_eq!(validate_guess("-", &none), Err(InputError::NotALetter));
    }

    #[test]
    fn repeated_letter_is_rejected_case_insensitively() {
        let guessed: HashSet<char> = ['A', 'E'].into_iter().collect();
        assert_eq!(validate_guess("e", &guessed), Err(InputError::AlreadyGuessed('E')));
        assert_eq!(validate_guess("b", &guessed), Ok('B'));
    }

    #[test]
    fn error_messages_are_player_facing() {
        assert_eq!(InputError::AlreadyGuessed('K').to_string(), "'K' has already been guessed");
        assert_eq!(InputError::NotALetter.to_string(), "that is not a letter");
    }
}
