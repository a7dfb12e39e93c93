//! # Rendering
//!
//! Every function here turns library results into a `String`; printing is left
//! to the caller so output can be checked in tests without a terminal.
//!
//! ## List Layout
//!
//! One line per movie, at most [`LINE_WIDTH`] columns:
//!
//! ```text
//!    1. Inception                                  2010  Christopher Nolan     Sci-Fi       ✓
//! ```
//!
//! The title column takes whatever the fixed columns leave and is truncated
//! with `…` when it does not fit. Widths are measured with `unicode-width`, so
//! wide characters do not break alignment.

use super::styles;
use reelapp::commands::{CmdMessage, CmdResult, MessageLevel};
use reelapp::model::Movie;
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;

/// Column widths for the list layout
const COL_ID: usize = 6; // "  12. "
const COL_YEAR: usize = 6; // "2010  "
const COL_DIRECTOR: usize = 22;
const COL_GENRE: usize = 13;
const COL_WATCHED: usize = 2;

const WATCHED_MARKER: &str = "✓";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Terminal,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Terminal
        }
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => styles::info(),
            MessageLevel::Success => styles::success(),
            MessageLevel::Warning => styles::warning(),
        };
        out.push_str(&style.apply_to(&message.content).to_string());
        out.push('\n');
    }
    out
}

pub fn render_movie_list(movies: &[Movie]) -> String {
    let title_width =
        LINE_WIDTH.saturating_sub(COL_ID + COL_YEAR + COL_DIRECTOR + COL_GENRE + COL_WATCHED);

    let mut out = String::new();
    for movie in movies {
        let index = format!("{:>4}. ", movie.id);
        let title = pad_to_width(&truncate_to_width(&movie.title, title_width), title_width);
        let year = pad_to_width(&movie.year.to_string(), COL_YEAR);
        let director = pad_to_width(&truncate_to_width(&movie.director, COL_DIRECTOR - 2), COL_DIRECTOR);
        let genre = pad_to_width(&truncate_to_width(&movie.genre, COL_GENRE - 1), COL_GENRE);
        let watched = if movie.is_watched { WATCHED_MARKER } else { "" };

        let line = format!(
            "{}{}{}{}{}{}",
            styles::id().apply_to(index),
            styles::title().apply_to(title),
            styles::muted().apply_to(year),
            styles::muted().apply_to(director),
            styles::muted().apply_to(genre),
            styles::watched().apply_to(watched),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_movie_detail(movie: &Movie) -> String {
    let mut out = format!(
        "{} {}\n",
        styles::id().apply_to(format!("{}.", movie.id)),
        styles::title().apply_to(&movie.title)
    );
    out.push_str(&"-".repeat(32));
    out.push('\n');

    let mut field = |label: &str, value: String| {
        out.push_str(&format!(
            "{} {}\n",
            styles::label().apply_to(format!("{:<10}", label)),
            value
        ));
    };
    field("Director", movie.director.clone());
    field("Year", movie.year.to_string());
    field("Genre", movie.genre.clone());
    if let Some(duration) = movie.duration {
        field("Duration", format!("{} min", duration));
    }
    if let Some(rating) = movie.rating {
        field("Rating", format!("{:.1}/10", rating));
    }
    if let Some(price) = movie.price {
        field("Price", format!("{:.2}", price));
    }
    field("Watched", if movie.is_watched { "yes" } else { "no" }.to_string());
    if let Some(synopsis) = &movie.synopsis {
        out.push('\n');
        out.push_str(synopsis);
        out.push('\n');
    }
    out
}

/// Machine-readable form of a command result.
///
/// `movies` holds the listed movies, or the affected ones for mutations.
pub fn render_json(result: &CmdResult) -> Result<String, serde_json::Error> {
    let movies = if result.listed_movies.is_empty() {
        &result.affected_movies
    } else {
        &result.listed_movies
    };
    serde_json::to_string_pretty(&json!({
        "movies": movies,
        "messages": result.messages,
    }))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
