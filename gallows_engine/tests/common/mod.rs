#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use anyhow::{Result, bail};
use gallows_engine as ge;

/// Feeds canned lines, then reports end of input.
pub struct ScriptedInput {
    lines: VecDeque<ge::InputEvent>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| ge::InputEvent::Line((*l).to_string())).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn then(mut self, event: ge::InputEvent) -> Self {
        self.lines.push_back(event);
        self
    }
}

impl ge::InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<ge::InputEvent> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(ge::InputEvent::Eof))
    }
}

/// Keeps every flushed item in order.
#[derive(Default)]
pub struct RecordingView {
    pending: Vec<ge::ViewItem>,
    pub shown: Vec<ge::ViewItem>,
    pub flushes: usize,
}

impl ge::Renderer for RecordingView {
    fn push(&mut self, item: ge::ViewItem) {
        self.pending.push(item);
    }

    fn flush(&mut self) {
        self.shown.append(&mut self.pending);
        self.flushes += 1;
    }
}

impl RecordingView {
    pub fn outcomes(&self) -> Vec<ge::GuessOutcome> {
        self.shown
            .iter()
            .filter_map(|item| match item {
                ge::ViewItem::GuessResult { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    pub fn rejections(&self) -> Vec<ge::InputError> {
        self.shown
            .iter()
            .filter_map(|item| match item {
                ge::ViewItem::InputRejected(err) => Some(*err),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&ge::ViewItem) -> bool) -> usize {
        self.shown.iter().filter(|item| pred(*item)).count()
    }
}

/// Hands out words in a fixed order.
pub struct FixedWords(pub VecDeque<String>);

impl FixedWords {
    pub fn new(words: &[&str]) -> Self {
        Self(words.iter().map(|w| (*w).to_string()).collect())
    }
}

impl ge::WordSource for FixedWords {
    fn next_word(&mut self) -> Result<String> {
        match self.0.pop_front() {
            Some(word) => Ok(word),
            None => bail!("out of words"),
        }
    }
}
