//! Word Module
//!
//! Supplies secret words for each round. [`WordList`] holds the normalized
//! candidates, and [`RandomWords`] draws from it.
use anyhow::{Result, bail};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can hand out a secret word for a new round.
pub trait WordSource {
    /// Produce the next secret word.
    ///
    /// # Errors
    /// Fails if no word is available; a round can't start without one.
    fn next_word(&mut self) -> Result<String>;
}

/// Words used when no word list can be loaded.
pub const BUILTIN_WORDS: &[&str] = &[
    "GALLOWS", "PUZZLE", "LANTERN", "HARBOR", "MEADOW", "WIZARD", "CANYON", "BLANKET", "ORCHARD",
    "VOLCANO", "COMPASS", "THUNDER", "PIRATE", "JOURNEY", "SAPPHIRE", "KEYBOARD", "GIRAFFE", "PENGUIN",
    "LABYRINTH", "QUARTZ",
];

/// A list of candidate secret words, each uppercase and purely alphabetic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from raw entries, returning it along with the entries that were rejected.
    ///
    /// Entries are trimmed and uppercased. Empty entries and entries with anything
    /// other than letters are rejected; duplicates are dropped silently.
    pub fn from_entries<I, S>(entries: I) -> (WordList, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = Vec::new();
        let mut rejected = Vec::new();
        for entry in entries {
            let raw = entry.as_ref();
            let word = raw.trim().to_uppercase();
            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                rejected.push(raw.to_string());
            } else if !words.contains(&word) {
                words.push(word);
            }
        }
        (WordList { words }, rejected)
    }

    /// The built-in fallback list.
    pub fn builtin() -> WordList {
        WordList::from_entries(BUILTIN_WORDS).0
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Draws words at random from a [`WordList`], never the same word twice in a row
/// when there is more than one to choose from.
#[derive(Debug, Clone)]
pub struct RandomWords {
    list: WordList,
    rng: StdRng,
    last: Option<usize>,
}

impl RandomWords {
    pub fn new(list: WordList) -> Self {
        Self::with_rng(list, StdRng::from_os_rng())
    }

    /// Reproducible draws for a given seed.
    pub fn seeded(list: WordList, seed: u64) -> Self {
        Self::with_rng(list, StdRng::seed_from_u64(seed))
    }

    fn with_rng(list: WordList, rng: StdRng) -> Self {
        Self { list, rng, last: None }
    }

    pub fn list(&self) -> &WordList {
        &self.list
    }
}

impl WordSource for RandomWords {
    fn next_word(&mut self) -> Result<String> {
        let count = self.list.len();
        if count == 0 {
            bail!("word list is empty");
        }
        let mut index = self.rng.random_range(0..count);
        if count > 1 && self.last == Some(index) {
            // shift to one of the other words, uniformly
            index = (index + 1 + self.rng.random_range(0..count - 1)) % count;
        }
        self.last = Some(index);
        debug!("drew word #{index} of {count}");
        Ok(self.list.words[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_normalized_and_filtered() {
        let (list, rejected) = WordList::from_entries(["  apple ", "Pear", "", "x-ray", "apple", "r2d2"]);
        assert_eq!(list.words(), &["APPLE".to_string(), "PEAR".to_string()]);
        assert_eq!(rejected, vec!["", "x-ray", "r2d2"]);
    }

    #[test]
    fn builtin_list_is_valid() {
        let list = WordList::builtin();
        assert_eq!(list.len(), BUILTIN_WORDS.len());
        assert!(list.words().iter().all(|w| w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn empty_list_cannot_supply_a_word() {
        let mut source = RandomWords::seeded(WordList::default(), 1);
        assert!(source.next_word().is_err());
    }

    #[test]
    fn single_word_list_repeats() {
        let (list, _) = WordList::from_entries(["only"]);
        let mut source = RandomWords::seeded(list, 7);
        assert_eq!(source.next_word().unwrap(), "ONLY");
        assert_eq!(source.next_word().unwrap(), "ONLY");
    }

    #[test]
    fn consecutive_draws_differ() {
        let (list, _) = WordList::from_entries(["one", "two"]);
        let mut source = RandomWords::seeded(list, 42);
        let mut previous = source.next_word().unwrap();
        for _ in 0..20 {
            let next = source.next_word().unwrap();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomWords::seeded(WordList::builtin(), 99);
        let mut b = RandomWords::seeded(WordList::builtin(), 99);
        for _ in 0..5 {
            assert_eq!(a.next_word().unwrap(), b.next_word().unwrap());
        }
    }
}
