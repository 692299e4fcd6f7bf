use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::tmdb::UpstreamError;

/// Client-facing representation of one search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub movie_id: i64,
    pub title: String,
    pub poster_image_url: Option<String>,
    pub popularity_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("missing search query parameter")]
    MissingSearch,
    #[error("invalid query parameter")]
    InvalidParameter,
    #[error("missing search query parameter value")]
    MissingSearchValue,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::MissingSearch
            | SearchError::InvalidParameter
            | SearchError::MissingSearchValue => StatusCode::BAD_REQUEST,
            SearchError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let SearchError::Upstream(ref e) = self {
            error!("Movie search failed: {}", e);
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
