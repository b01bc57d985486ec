//! Catalog search endpoint and request URL construction.
//!
//! An endpoint is a fixed template, `<base_url>?<query_param>=<value>`. The
//! value is appended with `application/x-www-form-urlencoded` encoding, so any
//! Unicode or punctuation in a query decodes back to exactly the same string.

use thiserror::Error;
use url::Url;

use canonical::SearchQuery;

/// Search page of the Toronto Public Library catalog.
pub const DEFAULT_BASE_URL: &str = "https://www.torontopubliclibrary.ca/search.jsp";

/// Query parameter that carries the search terms on [`DEFAULT_BASE_URL`].
pub const DEFAULT_QUERY_PARAM: &str = "Ntt";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("invalid search base url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("search base url must use http or https, got {0:?}")]
    UnsupportedScheme(String),
    #[error("query parameter name must not be empty")]
    EmptyQueryParam,
}

/// Where catalog searches are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    base_url: Url,
    query_param: String,
}

impl SearchEndpoint {
    /// Parses and validates an endpoint from its two parts.
    pub fn new(base_url: &str, query_param: &str) -> Result<Self, EndpointError> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| EndpointError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        match base_url.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
        }

        let query_param = query_param.trim();
        if query_param.is_empty() {
            return Err(EndpointError::EmptyQueryParam);
        }

        Ok(Self {
            base_url,
            query_param: query_param.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn query_param(&self) -> &str {
        &self.query_param
    }

    /// Builds the request URL for `query`. Existing query pairs on the base
    /// URL are kept; the search value is appended last.
    pub fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(&self.query_param, &query.value);
        url
    }
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        // Both parts are compile-time constants known to parse.
        Self::new(DEFAULT_BASE_URL, DEFAULT_QUERY_PARAM)
            .unwrap_or_else(|err| panic!("default search endpoint is invalid: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonical::{to_query, IdentifierKind, MAX_QUERY_CHARS};

    fn decoded_value(url: &Url, param: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == param)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn default_endpoint_builds_catalog_url() {
        let endpoint = SearchEndpoint::default();
        let q = to_query("978-0-13-235088-4", MAX_QUERY_CHARS);
        let url = endpoint.request_url(&q);
        assert_eq!(
            url.as_str(),
            "https://www.torontopubliclibrary.ca/search.jsp?Ntt=9780132350884"
        );
    }

    #[test]
    fn special_characters_round_trip() {
        let endpoint = SearchEndpoint::default();
        let q = SearchQuery {
            kind: IdentifierKind::Free,
            value: "Tom & Jerry <\"1940\"> #1 50% ?=".into(),
        };
        let url = endpoint.request_url(&q);
        assert!(!url.as_str().contains(' '));
        assert!(url.fragment().is_none());
        assert_eq!(decoded_value(&url, "Ntt").as_deref(), Some(q.value.as_str()));
    }

    #[test]
    fn existing_query_pairs_are_kept() {
        let endpoint = SearchEndpoint::new("https://catalog.example.org/find?lang=en", "q")
            .expect("valid endpoint");
        let q = to_query("Dune", MAX_QUERY_CHARS);
        let url = endpoint.request_url(&q);
        assert_eq!(url.as_str(), "https://catalog.example.org/find?lang=en&q=Dune");
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert!(matches!(
            SearchEndpoint::new("not a url", "q"),
            Err(EndpointError::InvalidUrl { .. })
        ));
        assert!(matches!(
            SearchEndpoint::new("ftp://catalog.example.org/", "q"),
            Err(EndpointError::UnsupportedScheme(s)) if s == "ftp"
        ));
        assert!(matches!(
            SearchEndpoint::new("https://catalog.example.org/", "  "),
            Err(EndpointError::EmptyQueryParam)
        ));
    }
}
