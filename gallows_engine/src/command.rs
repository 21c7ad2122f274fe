//! Command module
//!
//! Sorts a line of player input into a game command or a guess.
use variantly::Variantly;

/// What the player asked for on one line of input.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Anything that isn't a known command; validated as a guess.
    Guess(String),
    Help,
    Quit,
}

/// Parses an input line. Unrecognized input is passed through as a guess.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["quit" | "exit" | "QUIT" | "EXIT"] => Command::Quit,
        ["help" | "?" | "HELP"] => Command::Help,
        _ => Command::Guess(input.to_string()),
    }
}

/// Reads a yes/no answer; anything that isn't a yes is a no.
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
