//! Page-selection validation and tracking.
//!
//! Text selected on a page goes through [`validate_selection`] before it is
//! classified. The selection path has its own, looser cap
//! ([`canonical::MAX_SELECTION_CHARS`] by default) and reports what it did as
//! [`SelectionNotice`]s for the presentation layer.
//!
//! [`SelectionTracker`] holds the most recent selection. It is owned by
//! whoever observes selection changes and is passed around explicitly.

use serde::Serialize;
use thiserror::Error;

use canonical::{classify, truncate_chars, Classification};

/// Characters that are legal in a search but worth telling the user about,
/// since they are percent-encoded on the way out.
const SPECIAL_CHARS: [char; 5] = ['<', '>', '"', '\'', '&'];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selected text is empty")]
    Empty,
}

/// Informational notes about a validated selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum SelectionNotice {
    /// The selection was cut to `limit` characters.
    Truncated { limit: usize },
    /// The selection contains `< > " ' &`.
    SpecialCharacters,
}

/// A selection that is safe to hand to the query pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedSelection {
    pub text: String,
    pub notices: Vec<SelectionNotice>,
    pub classification: Classification,
}

impl ValidatedSelection {
    pub fn was_truncated(&self) -> bool {
        self.notices
            .iter()
            .any(|n| matches!(n, SelectionNotice::Truncated { .. }))
    }
}

/// Trims `text`, rejects it when nothing is left, and cuts it to
/// `max_chars` characters.
///
/// Inner whitespace is left alone here; the query pipeline collapses it.
pub fn validate_selection(
    text: &str,
    max_chars: usize,
) -> Result<ValidatedSelection, SelectionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SelectionError::Empty);
    }

    let mut notices = Vec::new();
    let kept = truncate_chars(trimmed, max_chars);
    if kept.len() < trimmed.len() {
        notices.push(SelectionNotice::Truncated { limit: max_chars });
    }
    if kept.contains(&SPECIAL_CHARS[..]) {
        notices.push(SelectionNotice::SpecialCharacters);
    }

    // A zero cap leaves nothing to search for.
    if kept.is_empty() {
        return Err(SelectionError::Empty);
    }

    Ok(ValidatedSelection {
        text: kept.to_string(),
        notices,
        classification: classify(kept),
    })
}

/// The most recent non-empty selection seen on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    last: Option<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection change. Returns true when the stored selection
    /// changed; blank selections and repeats are ignored.
    pub fn observe(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.last.as_deref() == Some(trimmed) {
            return false;
        }
        self.last = Some(trimmed.to_string());
        true
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
