use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Query string parameters of a single request.
///
/// A key that appears more than once is counted once; the last value wins.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    map: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Deserialize into a temporary normal map first
        let map = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(QueryParams { map })
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        QueryParams { map }
    }
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|v| v.as_str())
    }

    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let params: QueryParams = [("search", "Bond"), ("page", "")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert!(params.has("page"));
        assert_eq!(params.get("search"), Some("Bond"));
        assert_eq!(params.get("page"), Some(""));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.get_or_default("missing", "x"), "x");
    }

    #[test]
    fn test_empty() {
        let params = QueryParams::default();
        assert!(params.is_empty());
        assert!(!params.has("search"));
    }

    #[test]
    fn test_deserialize_and_duplicates() {
        let params: QueryParams = serde_json::from_str(r#"{"search":"Bond"}"#).unwrap();
        assert_eq!(params.get("search"), Some("Bond"));

        let params: QueryParams = [("search", "a"), ("search", "b")].into_iter().collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("search"), Some("b"));
    }
}
