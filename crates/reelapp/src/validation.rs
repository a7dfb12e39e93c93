//! Payload validation for movie records.
//!
//! Rules:
//! - `title`: non-empty after trimming, at most 200 characters. Stored trimmed.
//! - `director`: 1 to 100 characters
//! - `year`: between 1880 and five years past the current year
//! - `genre`: 1 to 50 characters
//! - `duration`: 1 to 300 minutes
//! - `rating`: 0.0 to 10.0
//! - `synopsis`: at most 1000 characters
//! - `price`: not negative
//!
//! Validation collects every violation instead of stopping at the first one, so
//! a client can fix a payload in one round trip.

use crate::model::{MovieUpdate, NewMovie};
use chrono::{Datelike, Utc};

pub const MIN_YEAR: i32 = 1880;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DIRECTOR_LEN: usize = 100;
pub const MAX_GENRE_LEN: usize = 50;
pub const MAX_SYNOPSIS_LEN: usize = 1000;
pub const MAX_DURATION: u32 = 300;
pub const MAX_RATING: f64 = 10.0;

/// Latest release year accepted today.
pub fn max_year() -> i32 {
    Utc::now().year() + 5
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every violation found in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a creation payload, returning it with the title trimmed.
pub fn validate_new_movie(mut movie: NewMovie) -> Result<NewMovie, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    movie.title = movie.title.trim().to_string();
    check_title(&movie.title, &mut errors);
    check_director(&movie.director, &mut errors);
    check_year(movie.year, &mut errors);
    check_genre(&movie.genre, &mut errors);
    if let Some(duration) = movie.duration {
        check_duration(duration, &mut errors);
    }
    if let Some(rating) = movie.rating {
        check_rating(rating, &mut errors);
    }
    if let Some(synopsis) = &movie.synopsis {
        check_synopsis(synopsis, &mut errors);
    }
    if let Some(price) = movie.price {
        check_price(price, &mut errors);
    }

    errors.into_result(movie)
}

/// Validates the fields present in a sparse update.
pub fn validate_update(mut update: MovieUpdate) -> Result<MovieUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(title) = update.title.as_mut() {
        *title = title.trim().to_string();
        check_title(title, &mut errors);
    }
    if let Some(director) = &update.director {
        check_director(director, &mut errors);
    }
    if let Some(year) = update.year {
        check_year(year, &mut errors);
    }
    if let Some(genre) = &update.genre {
        check_genre(genre, &mut errors);
    }
    if let Some(Some(duration)) = update.duration {
        check_duration(duration, &mut errors);
    }
    if let Some(Some(rating)) = update.rating {
        check_rating(rating, &mut errors);
    }
    if let Some(Some(synopsis)) = &update.synopsis {
        check_synopsis(synopsis, &mut errors);
    }
    if let Some(Some(price)) = update.price {
        check_price(price, &mut errors);
    }

    errors.into_result(update)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_title(title: &str, errors: &mut ValidationErrors) {
    if title.is_empty() {
        errors.push("title", "title cannot be empty or whitespace");
    } else if char_len(title) > MAX_TITLE_LEN {
        errors.push(
            "title",
            format!("title must be at most {} characters", MAX_TITLE_LEN),
        );
    }
}

fn check_director(director: &str, errors: &mut ValidationErrors) {
    let len = char_len(director);
    if len == 0 || len > MAX_DIRECTOR_LEN {
        errors.push(
            "director",
            format!("director must be 1 to {} characters", MAX_DIRECTOR_LEN),
        );
    }
}

fn check_genre(genre: &str, errors: &mut ValidationErrors) {
    let len = char_len(genre);
    if len == 0 || len > MAX_GENRE_LEN {
        errors.push(
            "genre",
            format!("genre must be 1 to {} characters", MAX_GENRE_LEN),
        );
    }
}

fn check_year(year: i32, errors: &mut ValidationErrors) {
    if year < MIN_YEAR {
        errors.push(
            "year",
            format!("year must be greater than or equal to {}", MIN_YEAR),
        );
    } else if year > max_year() {
        errors.push(
            "year",
            format!("year cannot be later than {}", max_year()),
        );
    }
}

fn check_duration(duration: u32, errors: &mut ValidationErrors) {
    if duration == 0 || duration > MAX_DURATION {
        errors.push(
            "duration",
            format!("duration must be 1 to {} minutes", MAX_DURATION),
        );
    }
}

fn check_rating(rating: f64, errors: &mut ValidationErrors) {
    if !(0.0..=MAX_RATING).contains(&rating) {
        errors.push("rating", format!("rating must be 0.0 to {:.1}", MAX_RATING));
    }
}

fn check_synopsis(synopsis: &str, errors: &mut ValidationErrors) {
    if char_len(synopsis) > MAX_SYNOPSIS_LEN {
        errors.push(
            "synopsis",
            format!("synopsis must be at most {} characters", MAX_SYNOPSIS_LEN),
        );
    }
}

fn check_price(price: f64, errors: &mut ValidationErrors) {
    if price.is_nan() || price < 0.0 {
        errors.push("price", "price cannot be negative");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> NewMovie {
        NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi")
    }

    #[test]
    fn valid_movie_passes() {
        let movie = inception().with_rating(8.8).with_duration(148);
        assert_eq!(validate_new_movie(movie.clone()), Ok(movie));
    }

    #[test]
    fn title_is_trimmed() {
        let mut movie = inception();
        movie.title = "  Inception  ".to_string();
        let validated = validate_new_movie(movie).unwrap();
        assert_eq!(validated.title, "Inception");
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let mut movie = inception();
        movie.title = "   ".to_string();
        let err = validate_new_movie(movie).unwrap_err();
        assert_eq!(err.fields(), vec!["title"]);
    }

    #[test]
    fn year_bounds() {
        let mut movie = inception();
        movie.year = 1879;
        assert!(validate_new_movie(movie.clone()).is_err());

        movie.year = 1880;
        assert!(validate_new_movie(movie.clone()).is_ok());

        movie.year = max_year();
        assert!(validate_new_movie(movie.clone()).is_ok());

        movie.year = max_year() + 1;
        assert!(validate_new_movie(movie).is_err());
    }

    #[test]
    fn collects_every_violation() {
        let mut movie = inception();
        movie.director = String::new();
        movie.genre = "g".repeat(51);
        movie.duration = Some(301);
        movie.rating = Some(10.5);
        movie.price = Some(-1.0);
        movie.synopsis = Some("s".repeat(1001));

        let err = validate_new_movie(movie).unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["director", "genre", "duration", "rating", "synopsis", "price"]
        );
    }

    #[test]
    fn zero_duration_is_rejected() {
        let movie = inception().with_duration(0);
        assert!(validate_new_movie(movie).is_err());
    }

    #[test]
    fn rating_edges_are_inclusive() {
        assert!(validate_new_movie(inception().with_rating(0.0)).is_ok());
        assert!(validate_new_movie(inception().with_rating(10.0)).is_ok());
        assert!(validate_new_movie(inception().with_rating(f64::NAN)).is_err());
    }

    #[test]
    fn update_checks_only_present_fields() {
        let update = MovieUpdate {
            rating: Some(Some(7.5)),
            ..Default::default()
        };
        assert!(validate_update(update).is_ok());

        let update = MovieUpdate {
            year: Some(1500),
            ..Default::default()
        };
        assert_eq!(validate_update(update).unwrap_err().fields(), vec!["year"]);
    }

    #[test]
    fn update_null_clears_are_allowed() {
        let update = MovieUpdate {
            duration: Some(None),
            price: Some(None),
            ..Default::default()
        };
        assert!(validate_update(update).is_ok());
    }

    #[test]
    fn update_title_is_trimmed() {
        let update = MovieUpdate {
            title: Some(" Dunkirk ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_update(update).unwrap().title.as_deref(),
            Some("Dunkirk")
        );
    }

    #[test]
    fn display_joins_violations() {
        let mut movie = inception();
        movie.year = 1000;
        movie.price = Some(-2.0);
        let err = validate_new_movie(movie).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("year:"));
        assert!(text.contains("; price: price cannot be negative"));
    }
}
