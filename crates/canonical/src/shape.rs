//! Shape-rule tables shared by the normalizer, classifier and callers.
//!
//! Every length cap and identifier shape lives here as a named constant so
//! call sites never carry bare literals. Changing any value in this module
//! changes classification output.

/// Maximum length, in characters, of a free-text search query.
pub const MAX_QUERY_CHARS: usize = 200;

/// Maximum length, in characters, of text accepted from a page selection
/// before it reaches classification.
pub const MAX_SELECTION_CHARS: usize = 500;

/// Exact candidate length of an ISBN-10 (nine digits plus a check character).
pub const ISBN10_LEN: usize = 10;

/// Exact candidate length of an ISBN-13.
pub const ISBN13_LEN: usize = 13;

/// EAN prefixes an ISBN-13 must start with.
pub const ISBN13_PREFIXES: [&str; 2] = ["978", "979"];

/// All-digit candidate lengths that are kept as possible identifiers.
pub const POSSIBLE_IDENTIFIER_LENGTHS: [usize; 3] = [9, 11, 12];

/// The only non-digit allowed in a candidate, and only as its last character.
pub const CHECK_CHAR: char = 'X';

/// Returns true when `c` survives candidate extraction.
#[inline]
pub(crate) fn is_candidate_char(c: char) -> bool {
    c.is_ascii_digit() || c == CHECK_CHAR || c == 'x'
}

/// Returns true when `digits` starts with one of [`ISBN13_PREFIXES`].
#[inline]
pub(crate) fn has_isbn13_prefix(digits: &str) -> bool {
    ISBN13_PREFIXES
        .iter()
        .any(|prefix| digits.starts_with(prefix))
}
