use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /search/movie`.
///
/// Entries stay untyped here; only the ones a caller keeps are decoded
/// into [`UpstreamMovie`].
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Value>,
}

/// One entry of the upstream result list. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub popularity: f64,
    pub vote_count: u64,
}
