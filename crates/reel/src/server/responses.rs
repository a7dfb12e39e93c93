//! JSON envelopes returned by the HTTP API.

use reelapp::commands::CmdResult;
use reelapp::model::Movie;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
}

/// A single-movie answer. `data` is null after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<Movie>,
}

impl MovieResponse {
    pub fn new(message: impl Into<String>, data: Option<Movie>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// Envelope for a mutation, carrying the movie it touched.
    pub fn from_affected(result: CmdResult) -> Self {
        let message = result.summary().to_string();
        Self::new(message, result.affected_movies.into_iter().next())
    }

    /// Envelope for a lookup, carrying the movie it found.
    pub fn from_listed(result: CmdResult) -> Self {
        let message = result.summary().to_string();
        Self::new(message, result.listed_movies.into_iter().next())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<Movie>,
    pub total: usize,
}

impl MovieListResponse {
    pub fn from_listing(result: CmdResult) -> Self {
        let message = result.summary().to_string();
        let total = result.listed_movies.len();
        Self {
            success: true,
            message,
            data: result.listed_movies,
            total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub detail: String,
    pub error_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelapp::model::NewMovie;

    fn heat() -> Movie {
        Movie::from_new(4, NewMovie::new("Heat", "Michael Mann", 1995, "Crime"))
    }

    #[test]
    fn list_envelope_counts_movies() {
        let mut result = CmdResult::default().with_listed_movies(vec![heat()]);
        result.add_message(reelapp::commands::CmdMessage::info("1 movies found"));

        let envelope = MovieListResponse::from_listing(result);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total"], 1);
        assert_eq!(json["message"], "1 movies found");
        assert_eq!(json["data"][0]["title"], "Heat");
    }

    #[test]
    fn delete_envelope_has_null_data() {
        let envelope = MovieResponse::new("Movie with id 4 deleted successfully", None);
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json["data"].is_null());
    }

    #[test]
    fn error_type_serializes_as_null_when_absent() {
        let body = ErrorResponse {
            status_code: 500,
            detail: "disk on fire".to_string(),
            error_type: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("error_type").unwrap().is_null());
    }
}
