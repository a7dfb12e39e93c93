//! Encoding and decoding of the on-disk catalog document.

use crate::error::{ReelError, Result};
use crate::model::Movie;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Largest id a document may carry. Keeps `next_id` and every id above it
/// representable.
pub const MAX_ID: u64 = i64::MAX as u64;

#[derive(Serialize)]
#[serde(untagged)]
enum Entry<'a> {
    Movie(&'a Movie),
    Preserved(&'a Value),
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    movies: Vec<Entry<'a>>,
    next_id: u64,
}

/// Pretty-printed document with movies in id order.
///
/// `preserved` entries are written back untouched, interleaved by id.
pub fn encode(
    records: &BTreeMap<u64, Movie>,
    preserved: &BTreeMap<u64, Value>,
    next_id: u64,
) -> Result<String> {
    let mut entries: BTreeMap<u64, Entry<'_>> = preserved
        .iter()
        .map(|(id, raw)| (*id, Entry::Preserved(raw)))
        .collect();
    entries.extend(records.iter().map(|(id, movie)| (*id, Entry::Movie(movie))));

    let doc = CatalogDocument {
        movies: entries.into_values().collect(),
        next_id,
    };
    serde_json::to_string_pretty(&doc).map_err(ReelError::Serialization)
}

/// State recovered from a readable document.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub records: BTreeMap<u64, Movie>,
    /// Entries with a usable id whose fields do not fit a movie. They are
    /// not queryable but survive every rewrite.
    pub preserved: BTreeMap<u64, Value>,
    pub next_id: u64,
    /// Entries dropped for lacking a usable integer id.
    pub skipped: usize,
}

/// Decodes a document, or returns `None` if it is empty or not a catalog at all.
///
/// Individual bad entries do not make the document unreadable; they are
/// counted in [`LoadedCatalog::skipped`].
pub fn decode(text: &str) -> Option<LoadedCatalog> {
    if text.trim().is_empty() {
        return None;
    }

    let value: Value = serde_json::from_str(text).ok()?;
    let object = value.as_object()?;

    let entries: &[Value] = match object.get("movies") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items,
        Some(_) => return None,
    };

    let mut records = BTreeMap::new();
    let mut preserved = BTreeMap::new();
    let mut skipped = 0;
    for entry in entries {
        let id = entry.get("id").and_then(Value::as_u64);
        let Some(id) = id.filter(|id| *id <= MAX_ID) else {
            if let Some(id) = id {
                tracing::warn!(id, "skipping catalog entry with out of range id");
            }
            skipped += 1;
            continue;
        };
        match serde_json::from_value::<Movie>(entry.clone()) {
            Ok(movie) => {
                preserved.remove(&id);
                records.insert(id, movie);
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "keeping catalog entry that does not fit a movie");
                records.remove(&id);
                preserved.insert(id, entry.clone());
            }
        }
    }

    let max_id = records
        .keys()
        .next_back()
        .into_iter()
        .chain(preserved.keys().next_back())
        .max()
        .copied();
    let derived = max_id.and_then(|max| max.checked_add(1)).unwrap_or(1);
    let next_id = match object.get("next_id").and_then(Value::as_u64) {
        Some(stored) if stored > 0 && stored <= MAX_ID + 1 => stored.max(derived),
        _ => derived,
    };

    Some(LoadedCatalog {
        records,
        preserved,
        next_id,
        skipped,
    })
}
