//! Whitespace normalization for raw search text.
//!
//! This is the first stage of query preparation. It never truncates and never
//! fails; length policy belongs to the caller (see [`crate::to_query`]).
//!
//! # Whitespace Definition
//!
//! Unicode `White_Space` is used, which includes:
//! - ASCII space, tab, newline and carriage return
//! - Non-breaking space (U+00A0)
//! - The other Unicode space separators and line/paragraph separators
//!
//! # Examples
//!
//! ```rust
//! use canonical::normalize;
//!
//! let normalized = normalize("  The   Great\tGatsby \n");
//! assert_eq!(normalized.as_str(), "The Great Gatsby");
//! ```

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// Search text with whitespace collapsed and trimmed.
///
/// The only way to build one is [`normalize`], so a `NormalizedText` never
/// has leading or trailing whitespace and never contains two whitespace
/// characters in a row. Internal whitespace is always a single ASCII space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in Unicode scalar values, the unit every cap is expressed in.
    pub fn len_chars(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedText> for String {
    fn from(value: NormalizedText) -> Self {
        value.0
    }
}

/// Collapses every whitespace run to one space and trims the edges.
///
/// Empty and whitespace-only input yields an empty value; callers decide
/// whether that is worth reporting.
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("hello\r\n\r\nworld").as_str(), "hello world");
/// assert_eq!(normalize("hello\u{00A0}world").as_str(), "hello world");
/// assert!(normalize(" \t\n ").is_empty());
/// ```
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText(collapse_whitespace(raw))
}

/// Collapses repeated whitespace, trims edges, and turns newlines into
/// single spaces.
///
/// Splits on any Unicode whitespace and joins the segments with one ASCII
/// space, so the result has no leading or trailing whitespace.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello   world  "), "hello world");
/// assert_eq!(collapse_whitespace("hello \t \t world"), "hello world");
/// assert_eq!(collapse_whitespace(""), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
