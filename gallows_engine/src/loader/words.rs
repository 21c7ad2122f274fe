//! `loader::words` module
//!
//! Loads the word list from TOML. Bad entries are skipped, and if nothing
//! usable is left the built-in list takes over.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::words::WordList;

/// Layout of a word list file: `words = ["apple", "pear"]`
#[derive(Debug, Deserialize)]
struct WordFile {
    words: Vec<String>,
}

/// Loads a word list from a TOML file, falling back to the built-in list.
///
/// This function never fails.
pub fn load_words(toml_path: &Path) -> WordList {
    match try_load_words(toml_path) {
        Ok(list) if list.is_empty() => {
            warn!(
                "'{}' has no usable words. Using the built-in word list.",
                toml_path.display()
            );
            WordList::builtin()
        },
        Ok(list) => {
            info!("{} words loaded from '{}'", list.len(), toml_path.display());
            list
        },
        Err(e) => {
            warn!(
                "Could not load words from '{}': {:#}. Using the built-in word list.",
                toml_path.display(),
                e
            );
            WordList::builtin()
        },
    }
}

fn try_load_words(toml_path: &Path) -> Result<WordList> {
    let raw = fs::read_to_string(toml_path)
        .with_context(|| format!("reading word list from '{}'", toml_path.display()))?;
    let file: WordFile =
        toml::from_str(&raw).with_context(|| format!("parsing word list from '{}'", toml_path.display()))?;

    let (list, rejected) = WordList::from_entries(&file.words);
    for entry in &rejected {
        warn!("skipping word list entry {entry:?}: words must be letters only");
    }
    Ok(list)
}
