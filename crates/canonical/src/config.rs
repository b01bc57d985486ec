//! Length caps for query preparation.
//!
//! [`QueryConfig`] carries the two caps callers choose between: the free-text
//! query cap and the page-selection cap. Both default to the constants in
//! [`crate::shape`].
//!
//! ```rust
//! use canonical::{QueryConfig, MAX_QUERY_CHARS, MAX_SELECTION_CHARS};
//!
//! let config = QueryConfig::default();
//! assert_eq!(config.max_query_chars, MAX_QUERY_CHARS);
//! assert_eq!(config.max_selection_chars, MAX_SELECTION_CHARS);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;
use crate::query::{to_query, SearchQuery};
use crate::shape::{MAX_QUERY_CHARS, MAX_SELECTION_CHARS};

/// Caps applied while turning raw text into a [`SearchQuery`].
///
/// ```json
/// {
///   "max_query_chars": 200,
///   "max_selection_chars": 500
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryConfig {
    /// Maximum characters of a free-text query value.
    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,

    /// Maximum characters kept from a page selection before classification.
    ///
    /// Must be at least `max_query_chars`, otherwise the selection path would
    /// cut text the query path is allowed to keep.
    #[serde(default = "default_max_selection_chars")]
    pub max_selection_chars: usize,
}

impl QueryConfig {
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.max_query_chars == 0 {
            return Err(CanonicalError::InvalidConfig(
                "max_query_chars must be >= 1".into(),
            ));
        }
        if self.max_selection_chars < self.max_query_chars {
            return Err(CanonicalError::InvalidConfig(format!(
                "max_selection_chars ({}) must be >= max_query_chars ({})",
                self.max_selection_chars, self.max_query_chars
            )));
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_query_chars: MAX_QUERY_CHARS,
            max_selection_chars: MAX_SELECTION_CHARS,
        }
    }
}

fn default_max_query_chars() -> usize {
    MAX_QUERY_CHARS
}

fn default_max_selection_chars() -> usize {
    MAX_SELECTION_CHARS
}

/// [`to_query`] with the configured free-text cap.
pub fn build_query(raw: &str, cfg: &QueryConfig) -> SearchQuery {
    to_query(raw, cfg.max_query_chars)
}
