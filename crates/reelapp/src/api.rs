//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations, whichever client is calling: the CLI and
//! the HTTP server both hold a [`CatalogApi`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the store, so its lifetime and file path are explicit
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: No stdout, no HTTP status codes
//! - **Locking**: The store is not internally synchronized. A multi-threaded host
//!   must serialize access, e.g. one mutex around the `CatalogApi`.
//!
//! ## Generic Over DataStore
//!
//! `CatalogApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileCatalog>`
//! - Testing: `CatalogApi<InMemoryCatalog>`

use crate::commands::{self, filter::MovieFilter, CmdResult};
use crate::error::Result;
use crate::model::{MovieUpdate, NewMovie};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for catalog operations.
pub struct CatalogApi<S: DataStore> {
    store: S,
    data_file: PathBuf,
}

impl<S: DataStore> CatalogApi<S> {
    pub fn new(store: S, data_file: PathBuf) -> Self {
        Self { store, data_file }
    }

    /// The catalog document this API persists to.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_movie(&mut self, movie: NewMovie) -> Result<CmdResult> {
        commands::create::run(&mut self.store, movie)
    }

    pub fn get_movie(&self, id: u64) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn list_movies(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn update_movie(&mut self, id: u64, changes: MovieUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, changes)
    }

    pub fn delete_movie(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn movies_by_year(&self, year: i32) -> CmdResult {
        commands::filter::run(&self.store, &MovieFilter::Year(year))
    }

    pub fn movies_by_director(&self, name: &str) -> CmdResult {
        commands::filter::run(&self.store, &MovieFilter::Director(name.to_string()))
    }

    pub fn movies_by_genre(&self, genre: &str) -> CmdResult {
        commands::filter::run(&self.store, &MovieFilter::Genre(genre.to_string()))
    }

    pub fn search_movies(&self, query: &str) -> CmdResult {
        commands::search::run(&self.store, query)
    }
}
