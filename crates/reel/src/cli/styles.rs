//! Terminal styles for the reel CLI.
//!
//! Code asks for a style by what the text *is* (an id, a title, a muted
//! detail) rather than by color, so the palette can change in one place.
//! `console` drops the escape codes on its own when stdout is not a terminal.

use console::Style;

pub fn id() -> Style {
    Style::new().yellow()
}

pub fn title() -> Style {
    Style::new().bold()
}

/// Secondary details: year, director, genre
pub fn muted() -> Style {
    Style::new().color256(246)
}

pub fn watched() -> Style {
    Style::new().green()
}

pub fn label() -> Style {
    Style::new().color256(246).italic()
}

pub fn info() -> Style {
    Style::new().dim()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn warning() -> Style {
    Style::new().yellow()
}

