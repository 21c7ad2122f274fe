//! Stage-art for the gallows, one picture per miss from an empty scaffold to a
//! finished figure.

/// Pictures indexed by stage, 0 (no misses) through 6 (round lost).
pub const GALLOWS_STAGES: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Index of the last stage, shown when the round is lost.
pub const FINAL_STAGE: usize = GALLOWS_STAGES.len() - 1;

/// Map a miss count onto a stage.
///
/// Thresholds other than six are scaled so the last stage appears exactly
/// when `errors` reaches `max_errors`.
pub fn stage_index(errors: usize, max_errors: usize) -> usize {
    if max_errors == 0 || errors >= max_errors {
        return FINAL_STAGE;
    }
    errors * FINAL_STAGE / max_errors
}

/// Picture for the given miss count.
pub fn stage_art(errors: usize, max_errors: usize) -> &'static str {
    GALLOWS_STAGES[stage_index(errors, max_errors)].trim_start_matches('\n')
}
