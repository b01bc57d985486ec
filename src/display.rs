//! Text for the presentation layer. Nothing here changes a query value.

use std::borrow::Cow;

use canonical::{Classification, IdentifierKind, SearchQuery};

use crate::selection::SelectionNotice;

const ELLIPSIS: &str = "...";

/// Human label for an identifier kind; free text has none.
pub fn kind_label(kind: IdentifierKind) -> Option<&'static str> {
    match kind {
        IdentifierKind::Isbn10 => Some("ISBN-10"),
        IdentifierKind::Isbn13 => Some("ISBN-13"),
        IdentifierKind::Possible => Some("Possible ISBN"),
        IdentifierKind::Free => None,
    }
}

/// `"Detected ISBN-13: 9780132350884"`, or `None` for free text.
pub fn detection_message(classification: &Classification) -> Option<String> {
    let label = kind_label(classification.kind())?;
    let canonical = classification.canonical()?;
    Some(format!("Detected {label}: {canonical}"))
}

/// Same message, taken from an already-built query.
pub fn query_detection_message(query: &SearchQuery) -> Option<String> {
    let label = kind_label(query.kind)?;
    Some(format!("Detected {label}: {}", query.value))
}

pub fn notice_message(notice: &SelectionNotice) -> String {
    match notice {
        SelectionNotice::Truncated { limit } => {
            format!("Text was truncated to {limit} characters")
        }
        SelectionNotice::SpecialCharacters => {
            "Special characters will be encoded for search".to_string()
        }
    }
}

/// Shortens `text` for a button label or similar, ending it with `...` so
/// the whole thing is `max_chars` characters long.
pub fn truncate_for_display(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}
