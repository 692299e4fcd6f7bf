mod backoff;
pub mod client;
pub mod types;

pub use client::{MovieSearch, TmdbClient, UpstreamError};
pub use types::{SearchResponse, UpstreamMovie};
