use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::server::AppState;
use crate::util::QueryParams;

use super::search::{summarize, validate_search, MAX_RESULTS};
use super::types::{MovieSummary, SearchError};

/// GET /movies?search=<term>
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<MovieSummary>>, SearchError> {
    let term = validate_search(&params)?;

    let results = state.search.search_movies(term, MAX_RESULTS).await?;
    debug!("TMDB returned {} results for {:?}", results.len(), term);

    Ok(Json(summarize(&results, &state.config.tmdb.image_base_url)))
}

/// OPTIONS /movies, answered for CORS preflight.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

// POST, PUT and DELETE exist on the route but are not implemented.
pub async fn not_implemented() -> StatusCode {
    StatusCode::NOT_FOUND
}
