//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn art_style(&self) -> ColoredString;
    fn masked_style(&self) -> ColoredString;
    fn hit_style(&self) -> ColoredString;
    fn miss_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn win_style(&self) -> ColoredString;
    fn lose_style(&self) -> ColoredString;
    fn help_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{}]", self);
        bracketed.truecolor(75, 80, 75)
    }
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn art_style(&self) -> ColoredString {
        self.truecolor(190, 160, 120)
    }
    fn masked_style(&self) -> ColoredString {
        self.bold().truecolor(102, 208, 250)
    }
    fn hit_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn miss_style(&self) -> ColoredString {
        self.italic().truecolor(200, 50, 50)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(250, 200, 100)
    }
    fn win_style(&self) -> ColoredString {
        self.bold().truecolor(20, 220, 100)
    }
    fn lose_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
    fn help_style(&self) -> ColoredString {
        self.italic().truecolor(180, 180, 180)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn art_style(&self) -> ColoredString {
        self.as_str().art_style()
    }
    fn masked_style(&self) -> ColoredString {
        self.as_str().masked_style()
    }
    fn hit_style(&self) -> ColoredString {
        self.as_str().hit_style()
    }
    fn miss_style(&self) -> ColoredString {
        self.as_str().miss_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn win_style(&self) -> ColoredString {
        self.as_str().win_style()
    }
    fn lose_style(&self) -> ColoredString {
        self.as_str().lose_style()
    }
    fn help_style(&self) -> ColoredString {
        self.as_str().help_style()
    }
}

/// Wrapping options for plain paragraphs: terminal width, capped at 80 columns.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(80))
}
