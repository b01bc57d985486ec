//! ISBN shape classification.
//!
//! [`classify`] decides whether a string is an ISBN-10, an ISBN-13, a digit
//! run that might be an identifier, or plain free text. Only the structural
//! shape is checked; check-digit values are never computed.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. Keep ASCII digits and `X`/`x` (folded to `X`), drop everything else.
//! 2. More than one `X`, or an `X` anywhere but last: free text.
//! 3. Ten characters, nine digits then a digit or `X`: ISBN-10.
//! 4. Thirteen digits starting with `978` or `979`: ISBN-13.
//! 5. Nine, eleven or twelve digits: possible identifier.
//! 6. Anything else: free text.
//!
//! ```rust
//! use canonical::{classify, Classification};
//!
//! assert_eq!(
//!     classify("978-0-13-235088-4"),
//!     Classification::Isbn13 { canonical: "9780132350884".into() }
//! );
//! assert_eq!(classify("X123456789"), Classification::FreeText);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{
    has_isbn13_prefix, is_candidate_char, CHECK_CHAR, ISBN10_LEN, ISBN13_LEN,
    POSSIBLE_IDENTIFIER_LENGTHS,
};

/// Outcome of classifying one search string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Classification {
    /// Nine digits followed by a digit or uppercase `X`.
    #[serde(rename = "isbn10")]
    Isbn10 { canonical: String },
    /// Thirteen digits beginning with `978` or `979`.
    #[serde(rename = "isbn13")]
    Isbn13 { canonical: String },
    /// Nine, eleven or twelve digits that match neither exact ISBN shape.
    #[serde(rename = "possible")]
    PossibleIdentifier { canonical: String },
    /// Not an identifier.
    #[serde(rename = "free")]
    FreeText,
}

impl Classification {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Classification::Isbn10 { .. } => IdentifierKind::Isbn10,
            Classification::Isbn13 { .. } => IdentifierKind::Isbn13,
            Classification::PossibleIdentifier { .. } => IdentifierKind::Possible,
            Classification::FreeText => IdentifierKind::Free,
        }
    }

    /// Canonical digit/`X` form for identifier variants, `None` for free text.
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Classification::Isbn10 { canonical }
            | Classification::Isbn13 { canonical }
            | Classification::PossibleIdentifier { canonical } => Some(canonical),
            Classification::FreeText => None,
        }
    }

    pub fn is_identifier(&self) -> bool {
        self.kind().is_identifier()
    }
}

/// Fieldless mirror of [`Classification`], used for tagging queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Isbn10,
    Isbn13,
    Possible,
    Free,
}

impl IdentifierKind {
    /// Wire tag: `isbn10`, `isbn13`, `possible` or `free`.
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierKind::Isbn10 => "isbn10",
            IdentifierKind::Isbn13 => "isbn13",
            IdentifierKind::Possible => "possible",
            IdentifierKind::Free => "free",
        }
    }

    pub fn is_identifier(self) -> bool {
        !matches!(self, IdentifierKind::Free)
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Digits and check characters extracted from a string, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidateDigits {
    digits: String,
    check_chars: usize,
}

impl CandidateDigits {
    pub(crate) fn from_text(text: &str) -> Self {
        let mut digits = String::with_capacity(ISBN13_LEN);
        let mut check_chars = 0;
        for c in text.chars().filter(|c| is_candidate_char(*c)) {
            if c.is_ascii_digit() {
                digits.push(c);
            } else {
                digits.push(CHECK_CHAR);
                check_chars += 1;
            }
        }
        Self {
            digits,
            check_chars,
        }
    }

    /// Candidate length; every candidate char is ASCII so bytes == chars.
    pub(crate) fn len(&self) -> usize {
        self.digits.len()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.digits
    }

    /// At most one `X`, and only in the last position.
    pub(crate) fn check_char_placement_ok(&self) -> bool {
        match self.check_chars {
            0 => true,
            1 => self.digits.ends_with(CHECK_CHAR),
            _ => false,
        }
    }

    pub(crate) fn all_digits(&self) -> bool {
        self.check_chars == 0
    }
}

/// Classifies `text` by the shape of its digit/`X` content.
///
/// Pure and total: every string, including the empty string, maps to exactly
/// one variant.
pub fn classify(text: &str) -> Classification {
    let candidate = CandidateDigits::from_text(text);

    if !candidate.check_char_placement_ok() {
        return Classification::FreeText;
    }

    let len = candidate.len();

    // Placement is already verified, so a 10-char candidate is nine digits
    // followed by a digit or X.
    if len == ISBN10_LEN {
        return Classification::Isbn10 {
            canonical: candidate.digits,
        };
    }

    if !candidate.all_digits() {
        return Classification::FreeText;
    }

    if len == ISBN13_LEN && has_isbn13_prefix(candidate.as_str()) {
        return Classification::Isbn13 {
            canonical: candidate.digits,
        };
    }

    // A 12-digit 978/979 run lands here on purpose: only exact length 13 is
    // an ISBN-13.
    if POSSIBLE_IDENTIFIER_LENGTHS.contains(&len) {
        return Classification::PossibleIdentifier {
            canonical: candidate.digits,
        };
    }

    Classification::FreeText
}
