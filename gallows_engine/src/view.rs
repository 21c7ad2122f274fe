//! View module.
//! Rather than printing to the console from the driver loop, messages for a turn are
//! collected as [`ViewItem`]s and displayed together when the turn is flushed.
use colored::Colorize;
use log::info;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::game::{GameState, GuessOutcome};
use crate::stages::stage_art;
use crate::style::{GameStyle, normal_block};
use crate::validate::InputError;

const ICON_HIT: &str = "\u{2611}"; // ✔
const ICON_MISS: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_DEATH: &str = "☠";

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

const HELP_TEXT: &str = "Guess the secret word one letter at a time. Each letter that isn't in the word \
adds a piece to the gallows; finish the word before the figure is complete. Type a single letter and \
press Enter to guess, \"help\" or \"?\" to see this again, and \"quit\" to leave.";

/// Anything that can present a turn's worth of [`ViewItem`]s to the player.
pub trait Renderer {
    /// Queue an item for the current turn.
    fn push(&mut self, item: ViewItem);
    /// Present everything queued since the last flush.
    fn flush(&mut self);
}

/// Something to show the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Banner,
    Board {
        errors: usize,
        max_errors: usize,
        masked: String,
        wrong_letters: Vec<char>,
    },
    GuessResult {
        letter: char,
        outcome: GuessOutcome,
    },
    InputRejected(InputError),
    Won {
        word: String,
        errors: usize,
    },
    Lost {
        word: String,
    },
    Help,
    Goodbye,
}

impl ViewItem {
    /// Snapshot of the board for the given round.
    pub fn board(state: &GameState) -> ViewItem {
        ViewItem::Board {
            errors: state.error_count(),
            max_errors: state.max_errors(),
            masked: state.masked_word(),
            wrong_letters: state.wrong_letters(),
        }
    }
}

/// Console renderer. Buffers items and prints them with ANSI styling on [`Renderer::flush`].
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub clear_screen: bool,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view that clears the screen before each board.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            clear_screen: true,
            items: Vec::new(),
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    // SECTION HANDLERS START HERE -------------------------------

    fn banner(&self) {
        if self.items.iter().any(ViewItem::is_banner) {
            println!("{:^width$}", "GALLOWS".title_style(), width = self.width.min(40));
            println!();
        }
    }

    fn board(&self) {
        for item in &self.items {
            if let ViewItem::Board {
                errors,
                max_errors,
                masked,
                wrong_letters,
            } = item
            {
                println!("{}", stage_art(*errors, *max_errors).art_style());
                println!();
                println!("    {}", masked.masked_style());
                println!();
                let misses = if wrong_letters.is_empty() {
                    "none".to_string()
                } else {
                    wrong_letters.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
                };
                println!("Misses ({errors}/{max_errors}): {}", misses.miss_style());
                println!();
            }
        }
    }

    fn guess_results(&self) {
        for item in &self.items {
            match item {
                ViewItem::GuessResult { letter, outcome } => match outcome {
                    GuessOutcome::Correct => {
                        println!("{:<4}{}", ICON_HIT.green(), format!("'{letter}' is in the word.").hit_style());
                    },
                    GuessOutcome::Incorrect => {
                        println!("{:<4}{}", ICON_MISS, format!("No '{letter}' in this word.").miss_style());
                    },
                    GuessOutcome::AlreadyGuessed => {
                        println!(
                            "{:<4}{}",
                            ICON_ERROR.yellow(),
                            format!("You already tried '{letter}'.").error_style()
                        );
                    },
                },
                ViewItem::InputRejected(err) => {
                    println!("{:<4}{}", ICON_ERROR.yellow(), capitalize(&err.to_string()).error_style());
                },
                _ => {},
            }
        }
    }

    fn round_end(&self) {
        for item in &self.items {
            match item {
                ViewItem::Won { word, errors } => {
                    println!(
                        "{:<4}{} The word was {} ({} miss{}).",
                        ICON_CELEBRATE,
                        "You win!".win_style(),
                        word.as_str().masked_style(),
                        errors,
                        if *errors == 1 { "" } else { "es" }
                    );
                },
                ViewItem::Lost { word } => {
                    println!(
                        "{:<4}{} The word was {}.",
                        ICON_DEATH.red(),
                        "You lose.".lose_style(),
                        word.as_str().masked_style()
                    );
                },
                _ => {},
            }
        }
    }

    fn system(&self) {
        if self.items.iter().any(ViewItem::is_help) {
            println!("{:.>width$}\n", "help".section_style(), width = self.width.min(80));
            println!("{}", fill(HELP_TEXT, normal_block()).help_style());
        }
        if self.items.iter().any(ViewItem::is_goodbye) {
            info!("player left the game");
            println!("Thanks for playing.");
        }
    }
}

impl Renderer for View {
    fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Compose and display all queued items, board first.
    fn flush(&mut self) {
        if self.items.is_empty() {
            return;
        }
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        if self.clear_screen && self.items.iter().any(ViewItem::is_board) {
            print!("{CLEAR_SCREEN}");
        }
        self.banner();
        self.board();
        self.guess_results();
        self.round_end();
        self.system();

        // clear the buffer for the next turn
        self.items.clear();
        println!();
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
