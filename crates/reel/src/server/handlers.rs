//! Route handlers. Each one locks the shared catalog, calls the API facade and
//! wraps the `CmdResult` in a response envelope.
//!
//! Mutations rewrite the catalog file, so they run on the blocking pool.

use super::error::ApiError;
use super::responses::{MovieListResponse, MovieResponse, WelcomeResponse};
use super::{AppState, SharedCatalog};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reelapp::api::CatalogApi;
use reelapp::commands::CmdResult;
use reelapp::model::{MovieUpdate, NewMovie};
use reelapp::store::DataStore;
use std::sync::Arc;

type ApiResult<T> = Result<T, ApiError>;

pub async fn root<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to the {}!", state.info.app_name),
        version: state.info.app_version.clone(),
    })
}

pub async fn create_movie<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MovieResponse>)> {
    let Json(movie) = payload?;
    let result = mutate(&state.catalog, move |api| api.create_movie(movie)).await?;
    Ok((StatusCode::CREATED, Json(MovieResponse::from_affected(result))))
}

pub async fn list_movies<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
) -> Json<MovieListResponse> {
    let result = state.catalog.lock().await.list_movies();
    Json(MovieListResponse::from_listing(result))
}

pub async fn get_movie<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<MovieResponse>> {
    let Path(id) = id?;
    let result = state.catalog.lock().await.get_movie(id)?;
    Ok(Json(MovieResponse::from_listed(result)))
}

pub async fn update_movie<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<MovieUpdate>, JsonRejection>,
) -> ApiResult<Json<MovieResponse>> {
    let Path(id) = id?;
    let Json(changes) = payload?;
    let result = mutate(&state.catalog, move |api| api.update_movie(id, changes)).await?;
    Ok(Json(MovieResponse::from_affected(result)))
}

pub async fn delete_movie<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<MovieResponse>> {
    let Path(id) = id?;
    let result = mutate(&state.catalog, move |api| api.delete_movie(id)).await?;
    Ok(Json(MovieResponse::new(result.summary(), None)))
}

pub async fn movies_by_year<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    year: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MovieListResponse>> {
    let Path(year) = year?;
    let result = state.catalog.lock().await.movies_by_year(year);
    listing_or_not_found(result)
}

pub async fn movies_by_director<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    director: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MovieListResponse>> {
    let Path(director) = director?;
    let result = state.catalog.lock().await.movies_by_director(&director);
    listing_or_not_found(result)
}

pub async fn movies_by_genre<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    genre: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MovieListResponse>> {
    let Path(genre) = genre?;
    let result = state.catalog.lock().await.movies_by_genre(&genre);
    listing_or_not_found(result)
}

pub async fn search_movies<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MovieListResponse>> {
    let Path(query) = query?;
    let result = state.catalog.lock().await.search_movies(&query);
    listing_or_not_found(result)
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

/// Run a catalog mutation off the async workers, holding the lock throughout.
async fn mutate<S, F>(catalog: &SharedCatalog<S>, op: F) -> ApiResult<CmdResult>
where
    S: DataStore + Send + 'static,
    F: FnOnce(&mut CatalogApi<S>) -> reelapp::error::Result<CmdResult> + Send + 'static,
{
    let catalog = Arc::clone(catalog);
    let outcome = tokio::task::spawn_blocking(move || {
        let mut api = catalog.blocking_lock();
        op(&mut api)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("catalog task failed: {e}")))?;
    Ok(outcome?)
}

/// Filtered listings answer 404 when nothing matches.
fn listing_or_not_found(result: CmdResult) -> ApiResult<Json<MovieListResponse>> {
    if result.listed_movies.is_empty() {
        return Err(ApiError::NotFound(result.summary().to_string()));
    }
    Ok(Json(MovieListResponse::from_listing(result)))
}
