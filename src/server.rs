use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::Config;
use crate::movies;
use crate::tmdb::MovieSearch;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search: Arc<dyn MovieSearch>,
}

impl AppState {
    pub fn new(config: Config, search: Arc<dyn MovieSearch>) -> Self {
        Self {
            config: Arc::new(config),
            search,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let movie_routes = Router::new().route(
        "/movies",
        get(movies::search_movies)
            .options(movies::preflight)
            .post(movies::not_implemented)
            .put(movies::not_implemented)
            .delete(movies::not_implemented),
    );

    Router::new()
        .merge(movie_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(axum::middleware::from_fn(crate::middleware::add_cors_headers))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}
