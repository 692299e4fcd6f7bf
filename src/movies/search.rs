use crate::tmdb::UpstreamMovie;
use crate::util::QueryParams;

use super::types::{MovieSummary, SearchError};

/// Upper bound on the number of results returned to a client.
pub const MAX_RESULTS: usize = 10;

const SEARCH_PARAM: &str = "search";

/// Check the query string and return the search term.
///
/// Rules are evaluated in order and the first match wins: a missing
/// `search` key, then any extra key, then an empty `search` value.
pub fn validate_search(params: &QueryParams) -> Result<&str, SearchError> {
    if params.is_empty() || !params.has(SEARCH_PARAM) {
        return Err(SearchError::MissingSearch);
    }
    if params.len() > 1 {
        return Err(SearchError::InvalidParameter);
    }

    let term = params.get_or_default(SEARCH_PARAM, "");
    if term.is_empty() {
        return Err(SearchError::MissingSearchValue);
    }
    Ok(term)
}

/// Reshape the first [`MAX_RESULTS`] upstream entries, keeping their order.
pub fn summarize(results: &[UpstreamMovie], image_base_url: &str) -> Vec<MovieSummary> {
    results
        .iter()
        .take(MAX_RESULTS)
        .map(|movie| MovieSummary {
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_image_url: movie
                .poster_path
                .as_ref()
                .map(|path| format!("{}{}", image_base_url, path)),
            popularity_summary: format!("{} out of {}", movie.popularity, movie.vote_count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    fn movie(id: i64, poster_path: Option<&str>) -> UpstreamMovie {
        UpstreamMovie {
            id,
            title: format!("Movie {}", id),
            poster_path: poster_path.map(str::to_string),
            popularity: 12.5,
            vote_count: 300,
        }
    }

    #[test]
    fn test_missing_search() {
        let err = validate_search(&params(&[])).unwrap_err();
        assert!(matches!(err, SearchError::MissingSearch));

        let err = validate_search(&params(&[("bad_query_param", "Bond")])).unwrap_err();
        assert!(matches!(err, SearchError::MissingSearch));
    }

    #[test]
    fn test_extra_parameter() {
        let err = validate_search(&params(&[("search", "Bond"), ("foo", "bar")])).unwrap_err();
        assert!(matches!(err, SearchError::InvalidParameter));

        // An extra key outranks an empty value.
        let err = validate_search(&params(&[("search", ""), ("foo", "bar")])).unwrap_err();
        assert!(matches!(err, SearchError::InvalidParameter));
    }

    #[test]
    fn test_empty_value() {
        let err = validate_search(&params(&[("search", "")])).unwrap_err();
        assert!(matches!(err, SearchError::MissingSearchValue));
        assert_eq!(err.to_string(), "missing search query parameter value");
    }

    #[test]
    fn test_valid_term() {
        assert_eq!(validate_search(&params(&[("search", "Bond")])).unwrap(), "Bond");
        assert_eq!(
            validate_search(&params(&[("search", "James Bond")])).unwrap(),
            "James Bond"
        );
    }

    #[test]
    fn test_summarize_truncates_in_order() {
        let results: Vec<_> = (1..=12).map(|id| movie(id, Some("/p.jpg"))).collect();
        let summaries = summarize(&results, IMAGE_BASE);
        assert_eq!(summaries.len(), MAX_RESULTS);
        let ids: Vec<i64> = summaries.iter().map(|s| s.movie_id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_summarize_short_list() {
        let results = vec![movie(7, None), movie(3, None)];
        let summaries = summarize(&results, IMAGE_BASE);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].movie_id, 7);
        assert_eq!(summaries[1].movie_id, 3);
        assert!(summarize(&[], IMAGE_BASE).is_empty());
    }

    #[test]
    fn test_summarize_fields() {
        let mut with_poster = movie(1, Some("/abc.jpg"));
        with_poster.popularity = 10.0;
        with_poster.vote_count = 42;

        let summaries = summarize(&[with_poster, movie(2, None)], IMAGE_BASE);
        assert_eq!(
            summaries[0],
            MovieSummary {
                movie_id: 1,
                title: "Movie 1".to_string(),
                poster_image_url: Some("https://image.tmdb.org/t/p/w500/abc.jpg".to_string()),
                popularity_summary: "10 out of 42".to_string(),
            }
        );
        assert_eq!(summaries[1].poster_image_url, None);
        assert_eq!(summaries[1].popularity_summary, "12.5 out of 300");
    }
}
