//! # Storage Layer
//!
//! The catalog is a single JSON document on disk mirrored by an in-memory
//! mapping from id to [`Movie`]. The mapping is the working copy; the document
//! is the durable copy.
//!
//! ## Document Shape
//!
//! ```text
//! {
//!   "movies": [ { "id": 1, "title": "...", ... }, ... ],
//!   "next_id": 2
//! }
//! ```
//!
//! ## Load
//!
//! Loading happens once, when the store is opened:
//!
//! 1. **Missing file**: parent directories are created and the empty document is
//!    written.
//! 2. **Empty or unparseable file**: the store resets to empty with `next_id = 1`
//!    and immediately rewrites the empty document. Startup never fails on a
//!    corrupt catalog.
//! 3. **Valid file**: entries without an integer `id` are dropped. Every other
//!    entry is kept. Missing movie fields take their empty values, and an entry
//!    whose fields have the wrong types is held back from queries but written
//!    back unchanged. `next_id` comes from the document when it is a positive
//!    integer, and is always raised above the highest id present. Ids above
//!    [`document::MAX_ID`] are dropped so the counter can always advance.
//!
//! ## Persist
//!
//! Every `add`, `update` and `delete` rewrites the whole document. A failed write
//! is logged and swallowed: the in-memory mapping stays authoritative until the
//! next successful write.
//!
//! ## Ids
//!
//! Ids come from a monotonically increasing counter. Deleting a movie never frees
//! its id for reuse.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: production store over a JSON file.
//! - [`memory::InMemoryCatalog`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{Movie, MovieUpdate, NewMovie};

pub mod backend;
pub mod catalog_store;
pub mod document;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for movie storage.
///
/// Single-record operations signal [`crate::error::ReelError::MovieNotFound`]
/// for unknown ids. Filtering queries never do: no match is an empty list.
pub trait DataStore {
    /// Store a new movie under the next id and return it
    fn add(&mut self, movie: NewMovie) -> Movie;

    /// Get a movie by id
    fn get(&self, id: u64) -> Result<Movie>;

    /// All movies, ordered by id
    fn list(&self) -> Vec<Movie>;

    /// Merge the present fields of `changes` onto a stored movie
    fn update(&mut self, id: u64, changes: &MovieUpdate) -> Result<Movie>;

    /// Remove a movie permanently
    fn delete(&mut self, id: u64) -> Result<()>;

    /// Movies released in exactly `year`
    fn by_year(&self, year: i32) -> Vec<Movie>;

    /// Movies whose director equals `name`, ignoring case
    fn by_director(&self, name: &str) -> Vec<Movie>;

    /// Movies whose genre equals `genre`, ignoring case
    fn by_genre(&self, genre: &str) -> Vec<Movie>;

    /// Movies with `query` as one whole word of the title, ignoring case
    fn search_title_word(&self, query: &str) -> Vec<Movie>;
}
