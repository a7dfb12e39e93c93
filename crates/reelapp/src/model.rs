//! # Domain Model
//!
//! Three shapes of the same movie record cross the library boundary:
//!
//! - [`Movie`]: a stored record. `id` is assigned by the store and never
//!   supplied by a caller.
//! - [`NewMovie`]: the payload for `add`. Everything except the id.
//! - [`MovieUpdate`]: a sparse payload for `update`. Only the fields that are
//!   present overwrite the stored record.
//!
//! ## Sparse Updates and `null`
//!
//! The nullable fields (`duration`, `rating`, `synopsis`, `price`) are
//! `Option<Option<T>>` on [`MovieUpdate`]:
//!
//! | JSON                   | Rust               | Effect               |
//! |------------------------|--------------------|----------------------|
//! | field absent           | `None`             | left untouched       |
//! | `"rating": null`       | `Some(None)`       | stored value cleared |
//! | `"rating": 8.5`        | `Some(Some(8.5))`  | stored value set     |

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_watched: bool,
}

impl Movie {
    pub fn from_new(id: u64, movie: NewMovie) -> Self {
        Self {
            id,
            title: movie.title,
            director: movie.director,
            year: movie.year,
            genre: movie.genre,
            duration: movie.duration,
            rating: movie.rating,
            synopsis: movie.synopsis,
            price: movie.price,
            is_watched: movie.is_watched,
        }
    }

    /// Whole-word, case-insensitive match against the title.
    ///
    /// "dark" matches "The Dark Knight"; "ark" does not.
    pub fn title_has_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.title
            .split_whitespace()
            .any(|part| part.to_lowercase() == word)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_watched: bool,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            year,
            genre: genre.into(),
            duration: None,
            rating: None,
            synopsis: None,
            price: None,
            is_watched: false,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn watched(mut self) -> Self {
        self.is_watched = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Option<u32>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub synopsis: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_watched: Option<bool>,
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl MovieUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrites exactly the fields present in this update.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(synopsis) = &self.synopsis {
            movie.synopsis = synopsis.clone();
        }
        if let Some(price) = self.price {
            movie.price = price;
        }
        if let Some(is_watched) = self.is_watched {
            movie.is_watched = is_watched;
        }
    }
}
