//! # HTTP Server
//!
//! The second UI client for the catalog: a JSON API built on axum.
//!
//! ## Shared State
//!
//! The catalog core is synchronous and not internally synchronized, so the
//! router holds the [`CatalogApi`] behind a single `tokio::sync::Mutex`. Every
//! handler locks it for the duration of one API call, which serializes all
//! reads and writes. Mutations take the lock from `spawn_blocking`, so the
//! file rewrite never stalls an async worker.
//!
//! ## Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | welcome message |
//! | POST | `/api/v1/movies` | create (201) |
//! | GET | `/api/v1/movies` | list |
//! | GET / PUT / DELETE | `/api/v1/movies/:id` | get / update / delete |
//! | GET | `/api/v1/movies/year/:year` | by release year |
//! | GET | `/api/v1/movies/director/:director` | by director |
//! | GET | `/api/v1/movies/genre/:genre` | by genre |
//! | GET | `/api/v1/movies/search/:query` | whole-word title search |
//!
//! Errors are rendered as `{ status_code, detail, error_type }` by
//! [`error::ApiError`].

pub mod error;
pub mod handlers;
pub mod responses;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use reelapp::api::CatalogApi;
use reelapp::config::{ConfigSummary, ReelConfig};
use reelapp::store::DataStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub type SharedCatalog<S> = Arc<Mutex<CatalogApi<S>>>;

pub struct AppState<S: DataStore> {
    pub catalog: SharedCatalog<S>,
    pub info: Arc<ConfigSummary>,
}

impl<S: DataStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            info: Arc::clone(&self.info),
        }
    }
}

pub fn build_router<S>(catalog: SharedCatalog<S>, config: &ReelConfig) -> Router
where
    S: DataStore + Send + 'static,
{
    let state = AppState {
        catalog,
        info: Arc::new(config.summary()),
    };

    let movies = Router::new()
        .route(
            "/movies",
            get(handlers::list_movies::<S>).post(handlers::create_movie::<S>),
        )
        .route(
            "/movies/:id",
            get(handlers::get_movie::<S>)
                .put(handlers::update_movie::<S>)
                .delete(handlers::delete_movie::<S>),
        )
        .route("/movies/year/:year", get(handlers::movies_by_year::<S>))
        .route(
            "/movies/director/:director",
            get(handlers::movies_by_director::<S>),
        )
        .route("/movies/genre/:genre", get(handlers::movies_by_genre::<S>))
        .route("/movies/search/:query", get(handlers::search_movies::<S>));

    Router::new()
        .route("/", get(handlers::root::<S>))
        .nest("/api/v1", movies)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(state)
}

fn cors_layer(config: &ReelConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Bind `config.bind_addr()` and serve until Ctrl-C.
pub async fn serve<S>(api: CatalogApi<S>, config: ReelConfig) -> std::io::Result<()>
where
    S: DataStore + Send + 'static,
{
    let addr = config.bind_addr();
    let data_file = api.data_file().to_path_buf();
    let app = build_router(Arc::new(Mutex::new(api)), &config);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        catalog = %data_file.display(),
        "{} {} listening",
        config.app_name,
        config.app_version
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
