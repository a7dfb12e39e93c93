use super::backend::StorageBackend;
use super::document;
use super::DataStore;
use crate::error::{ReelError, Result};
use crate::model::{Movie, MovieUpdate, NewMovie};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub struct CatalogStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    records: BTreeMap<u64, Movie>,
    /// Entries that could not be read as movies, written back as found
    preserved: BTreeMap<u64, Value>,
    next_id: u64,
}

impl<B: StorageBackend> CatalogStore<B> {
    /// Open a store over `backend`, loading (and if needed healing) its document.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            records: BTreeMap::new(),
            preserved: BTreeMap::new(),
            next_id: 1,
        };
        store.load();
        store
    }

    /// Replace the in-memory state with the backend's document.
    /// Never fails: a missing or unreadable document resets the catalog.
    pub fn load(&mut self) {
        let text = match self.backend.read_document() {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::info!(
                    path = %self.backend.location().display(),
                    "catalog file missing, creating empty catalog"
                );
                self.reset();
                return;
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "catalog file unreadable, resetting"
                );
                self.reset();
                return;
            }
        };

        match document::decode(&text) {
            Some(loaded) => {
                if loaded.skipped > 0 {
                    tracing::warn!(skipped = loaded.skipped, "dropped invalid catalog entries");
                }
                if !loaded.preserved.is_empty() {
                    tracing::warn!(
                        preserved = loaded.preserved.len(),
                        "kept unreadable catalog entries as-is"
                    );
                }
                self.records = loaded.records;
                self.preserved = loaded.preserved;
                self.next_id = loaded.next_id;
                tracing::debug!(
                    movies = self.records.len(),
                    next_id = self.next_id,
                    "catalog loaded"
                );
            }
            None => {
                tracing::warn!(
                    path = %self.backend.location().display(),
                    "catalog file empty or corrupt, resetting"
                );
                self.reset();
            }
        }
    }

    /// Write the full document. Failures are logged, not returned.
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::error!(
                path = %self.backend.location().display(),
                error = %e,
                "failed to persist catalog"
            );
        }
    }

    fn try_persist(&self) -> Result<()> {
        let text = document::encode(&self.records, &self.preserved, self.next_id)?;
        self.backend.write_document(&text)
    }

    fn reset(&mut self) {
        self.records.clear();
        self.preserved.clear();
        self.next_id = 1;
        self.persist();
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    fn collect_where<F>(&self, predicate: F) -> Vec<Movie>
    where
        F: Fn(&Movie) -> bool,
    {
        self.records
            .values()
            .filter(|m| predicate(m))
            .cloned()
            .collect()
    }
}

impl<B: StorageBackend> DataStore for CatalogStore<B> {
    fn add(&mut self, movie: NewMovie) -> Movie {
        let id = self.next_id;
        let record = Movie::from_new(id, movie);
        self.records.insert(id, record.clone());
        // Loading caps next_id at document::MAX_ID + 1
        self.next_id = id.saturating_add(1);
        self.persist();

        tracing::debug!(id, title = %record.title, "movie added");
        record
    }

    fn get(&self, id: u64) -> Result<Movie> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(ReelError::MovieNotFound(id))
    }

    fn list(&self) -> Vec<Movie> {
        self.records.values().cloned().collect()
    }

    fn update(&mut self, id: u64, changes: &MovieUpdate) -> Result<Movie> {
        let movie = self
            .records
            .get_mut(&id)
            .ok_or(ReelError::MovieNotFound(id))?;
        changes.apply_to(movie);
        let updated = movie.clone();
        self.persist();

        tracing::debug!(id, "movie updated");
        Ok(updated)
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        let removed = self.records.remove(&id).is_some() || self.preserved.remove(&id).is_some();
        if !removed {
            return Err(ReelError::MovieNotFound(id));
        }
        self.persist();

        tracing::debug!(id, "movie deleted");
        Ok(())
    }

    fn by_year(&self, year: i32) -> Vec<Movie> {
        self.collect_where(|m| m.year == year)
    }

    fn by_director(&self, name: &str) -> Vec<Movie> {
        let name = name.to_lowercase();
        self.collect_where(|m| m.director.to_lowercase() == name)
    }

    fn by_genre(&self, genre: &str) -> Vec<Movie> {
        let genre = genre.to_lowercase();
        self.collect_where(|m| m.genre.to_lowercase() == genre)
    }

    fn search_title_word(&self, query: &str) -> Vec<Movie> {
        self.collect_where(|m| m.title_has_word(query))
    }
}
