//! Engine record and query URL building

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the encoded query in a URL template
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// A selectable search engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Display label
    pub name: String,
    /// Search URL containing the `{query}` placeholder
    #[serde(rename = "url")]
    pub url_template: String,
}

impl Engine {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_template: url_template.into(),
        }
    }

    /// Build the search URL for a query
    ///
    /// The query is percent-encoded before substitution, so spaces become
    /// `%20` and reserved characters cannot break out of the parameter.
    pub fn search_url(&self, query: &str) -> String {
        self.url_template
            .replace(QUERY_PLACEHOLDER, &urlencoding::encode(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let engine = Engine::new("google", "谷歌", "https://www.google.com/search?q={query}");
        assert_eq!(
            engine.search_url("rust lang"),
            "https://www.google.com/search?q=rust%20lang"
        );
        assert_eq!(
            engine.search_url("a&b=c"),
            "https://www.google.com/search?q=a%26b%3Dc"
        );
    }

    #[test]
    fn test_engine_wire_format() {
        let engine = Engine::new("bing", "必应", "https://www.bing.com/search?q={query}");
        let json = serde_json::to_value(&engine).unwrap();
        assert_eq!(json["url"], "https://www.bing.com/search?q={query}");

        let back: Engine = serde_json::from_value(json).unwrap();
        assert_eq!(back, engine);
    }
}
