//! Final search query construction.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, IdentifierKind};
use crate::whitespace::normalize;

/// The string handed to the request dispatcher, plus how it was classified.
///
/// Serializes as `{ "kind": "isbn13", "value": "9780132350884" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    pub kind: IdentifierKind,
    pub value: String,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Normalizes `text`, classifies it and builds the query value.
///
/// Identifiers become their canonical digit/`X` form, which is never longer
/// than 13 characters. Free text keeps the normalized string, cut to
/// `max_chars` characters with any whitespace the cut exposes trimmed.
/// Normalization is idempotent, so text that is already normalized can be
/// passed straight in.
///
/// ```rust
/// use canonical::{to_query, IdentifierKind, MAX_QUERY_CHARS};
///
/// let q = to_query("  The   Great Gatsby  ", MAX_QUERY_CHARS);
/// assert_eq!(q.kind, IdentifierKind::Free);
/// assert_eq!(q.value, "The Great Gatsby");
///
/// let q = to_query("ISBN 0-306-40615-2", MAX_QUERY_CHARS);
/// assert_eq!(q.kind, IdentifierKind::Isbn10);
/// assert_eq!(q.value, "0306406152");
/// ```
pub fn to_query(text: &str, max_chars: usize) -> SearchQuery {
    let normalized = normalize(text);
    let classification = classify(normalized.as_str());
    let kind = classification.kind();

    let value = match classification.canonical() {
        Some(canonical) => canonical.to_string(),
        None => truncate_chars(normalized.as_str(), max_chars).to_string(),
    };

    SearchQuery { kind, value }
}

/// Cuts `text` to at most `max_chars` characters on a char boundary, then
/// trims trailing whitespace.
///
/// ```rust
/// use canonical::truncate_chars;
///
/// assert_eq!(truncate_chars("hello world", 6), "hello");
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("short", 50), "short");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].trim_end(),
        None => text,
    }
}
