//! Catalog search query layer.
//!
//! This crate turns raw search text (a page selection, a typed query) into
//! the string sent to a library catalog search, and tells the caller whether
//! that string is a book identifier.
//!
//! ## What we do
//!
//! - Whitespace normalization (collapses runs to single spaces, trims)
//! - ISBN shape classification: ISBN-10, ISBN-13, possible identifier, free text
//! - Canonical identifier forms (digits plus an uppercase check `X`)
//! - Length capping of free-text queries, in characters
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. The same text and cap give the
//! same [`SearchQuery`] on any machine and from any thread.
//!
//! ## Invariants worth knowing
//!
//! - `normalize(normalize(s)) == normalize(s)`
//! - Free-text query values never exceed the requested cap
//! - Identifier values are at most 13 characters
//! - An `X` that is not the last digit character, or a second `X`, always
//!   means free text
//! - Check digits are never verified, only shapes

mod classify;
mod config;
mod error;
mod query;
mod shape;
mod whitespace;

pub use crate::classify::{classify, Classification, IdentifierKind};
pub use crate::config::{build_query, QueryConfig};
pub use crate::error::CanonicalError;
pub use crate::query::{to_query, truncate_chars, SearchQuery};
pub use crate::shape::{
    CHECK_CHAR, ISBN10_LEN, ISBN13_LEN, ISBN13_PREFIXES, MAX_QUERY_CHARS, MAX_SELECTION_CHARS,
    POSSIBLE_IDENTIFIER_LENGTHS,
};
pub use crate::whitespace::{collapse_whitespace, normalize, NormalizedText};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_scenarios() {
        assert_eq!(
            classify("0123456789"),
            Classification::Isbn10 {
                canonical: "0123456789".into()
            }
        );
        assert_eq!(
            classify("012345678X"),
            Classification::Isbn10 {
                canonical: "012345678X".into()
            }
        );
        assert_eq!(
            classify("978-0-13-235088-4"),
            Classification::Isbn13 {
                canonical: "9780132350884".into()
            }
        );
        assert_eq!(classify("9770123456786"), Classification::FreeText);
        assert_eq!(classify("X123456789"), Classification::FreeText);
        assert_eq!(
            classify("123456789"),
            Classification::PossibleIdentifier {
                canonical: "123456789".into()
            }
        );

        let q = to_query("  The   Great Gatsby  ", MAX_QUERY_CHARS);
        assert_eq!(q.kind.as_str(), "free");
        assert_eq!(q.value, "The Great Gatsby");

        let q = to_query(&"a".repeat(250), MAX_QUERY_CHARS);
        assert_eq!(q.value.chars().count(), 200);
    }

    #[test]
    fn query_kind_agrees_with_classification() {
        for input in [
            "0123456789",
            "9780132350884",
            "123456789",
            "Pride and Prejudice",
            "",
        ] {
            let normalized = normalize(input);
            let q = to_query(normalized.as_str(), MAX_QUERY_CHARS);
            let c = classify(normalized.as_str());
            assert_eq!(q.kind, c.kind(), "kind mismatch for {input:?}");
            if let Some(canonical) = c.canonical() {
                assert_eq!(q.value, canonical);
            }
        }
    }

    #[test]
    fn same_input_same_output() {
        let input = " 978-1-4028-9462-6 ";
        assert_eq!(classify(input), classify(input));
        assert_eq!(
            to_query(input, MAX_QUERY_CHARS),
            to_query(input, MAX_QUERY_CHARS)
        );
    }
}
