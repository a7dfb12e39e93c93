use super::responses::ErrorResponse;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reelapp::error::ReelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> Option<&'static str> {
        match self {
            ApiError::NotFound(_) => Some("Not Found Item"),
            ApiError::Validation(_) => Some("Validation Error"),
            ApiError::BadRequest(_) => Some("Bad Request"),
            ApiError::Internal(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            status_code: status.as_u16(),
            detail: self.to_string(),
            error_type: self.error_type().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ReelError> for ApiError {
    fn from(e: ReelError) -> Self {
        match e {
            ReelError::MovieNotFound(_) => ApiError::NotFound(e.to_string()),
            ReelError::Validation(errors) => ApiError::Validation(errors.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Validation(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelapp::model::NewMovie;
    use reelapp::validation::validate_new_movie;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(ReelError::MovieNotFound(42));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Movie not found with id: 42");
    }

    #[test]
    fn validation_maps_to_422() {
        let errors = validate_new_movie(NewMovie::new("", "Nobody", 1700, "Drama")).unwrap_err();
        let err = ApiError::from(ReelError::Validation(errors));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn other_failures_map_to_500() {
        let err = ApiError::from(ReelError::Store("lost the catalog".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), None);
    }
}
