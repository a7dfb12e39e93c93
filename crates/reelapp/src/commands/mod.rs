//! # Command Layer
//!
//! This module contains the **business logic** of the catalog. Each command lives
//! in its own submodule and implements a plain function over any [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! - Validate incoming payloads before they reach the store
//! - Call the store operation
//! - Return a structured [`CmdResult`] with affected/listed movies and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, HTTP status codes
//! - **Argument parsing**: That's the client's job
//! - **Deciding what "no matches" means**: filter commands return an empty list
//!   plus an informational message; clients choose between an empty success and
//!   a not-found response
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryCatalog` to avoid filesystem dependencies.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a movie
//! - [`get`]: Fetch one movie by id
//! - [`list`]: Fetch all movies
//! - [`update`]: Merge changes into a movie
//! - [`delete`]: Remove a movie
//! - [`filter`]: Year, director and genre views
//! - [`search`]: Whole-word title search
//!
//! [`DataStore`]: crate::store::DataStore

use crate::model::Movie;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod filter;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Movies created, changed or removed by the command
    pub affected_movies: Vec<Movie>,
    /// Movies to display
    pub listed_movies: Vec<Movie>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_movies(mut self, movies: Vec<Movie>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<Movie>) -> Self {
        self.listed_movies = movies;
        self
    }

    /// The first message's text, or an empty string.
    pub fn summary(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}
