//! Workspace umbrella crate for catalog search.
//!
//! This crate stitches together query canonicalization, selection handling
//! and request URL construction so callers can go from raw text to a catalog
//! search URL with a single API entry point.
//!
//! ```rust
//! use catalog_search::{prepare_search, QueryConfig, SearchEndpoint};
//!
//! let request = prepare_search(
//!     "ISBN 978-0-13-235088-4",
//!     &QueryConfig::default(),
//!     &SearchEndpoint::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(request.query.value, "9780132350884");
//! assert_eq!(
//!     request.url.as_str(),
//!     "https://www.torontopubliclibrary.ca/search.jsp?Ntt=9780132350884"
//! );
//! ```

pub use canonical::{
    build_query, classify, collapse_whitespace, normalize, to_query, truncate_chars,
    CanonicalError, Classification, IdentifierKind, NormalizedText, QueryConfig, SearchQuery,
    CHECK_CHAR, ISBN10_LEN, ISBN13_LEN, ISBN13_PREFIXES, MAX_QUERY_CHARS, MAX_SELECTION_CHARS,
    POSSIBLE_IDENTIFIER_LENGTHS,
};

pub mod config;
pub mod display;
pub mod endpoint;
pub mod selection;

pub use crate::config::{CatalogSearchConfig, ConfigLoadError};
pub use crate::display::{
    detection_message, kind_label, notice_message, query_detection_message, truncate_for_display,
};
pub use crate::endpoint::{EndpointError, SearchEndpoint};
pub use crate::selection::{
    validate_selection, SelectionError, SelectionNotice, SelectionTracker, ValidatedSelection,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn, Level};
use url::Url;

/// Errors that can occur while turning text into a search request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("selection rejected: {0}")]
    Selection(#[from] SelectionError),
    #[error("search text is empty after normalization")]
    EmptyQuery,
}

/// A ready-to-dispatch catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub url: Url,
}

/// A search prepared from a page selection, with what validation noticed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSearch {
    pub selection: ValidatedSelection,
    pub request: SearchRequest,
}

/// Metrics observer for query preparation.
pub trait PipelineMetrics: Send + Sync {
    fn record_query(&self, latency: Duration, kind: IdentifierKind);
    fn record_rejection(&self, latency: Duration, error: &PipelineError);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_query(self, kind: IdentifierKind) {
        self.recorder.record_query(self.start.elapsed(), kind);
    }

    fn record_rejection(self, error: &PipelineError) {
        self.recorder.record_rejection(self.start.elapsed(), error);
    }
}

/// Normalize, classify and cap `raw`, then build the request URL.
///
/// The core never fails on any string; an empty final value is the one case
/// this layer refuses, since there is nothing to search for.
pub fn prepare_search(
    raw: &str,
    cfg: &QueryConfig,
    endpoint: &SearchEndpoint,
) -> Result<SearchRequest, PipelineError> {
    let start = Instant::now();
    let metrics = MetricsSpan::start();

    let span = tracing::span!(Level::INFO, "search.prepare", raw_len = raw.len());
    let _guard = span.enter();

    let query = build_query(raw, cfg);
    let elapsed_micros = start.elapsed().as_micros();

    if query.is_empty() {
        let err = PipelineError::EmptyQuery;
        warn!(error = %err, elapsed_micros, "query_rejected");
        if let Some(recorder) = metrics {
            recorder.record_rejection(&err);
        }
        return Err(err);
    }

    let url = endpoint.request_url(&query);
    info!(
        kind = %query.kind,
        value_len = query.value.chars().count(),
        elapsed_micros,
        "query_prepared"
    );
    if let Some(recorder) = metrics {
        recorder.record_query(query.kind);
    }

    Ok(SearchRequest { query, url })
}

/// Validate a page selection with the selection cap, then prepare the search.
pub fn prepare_selection_search(
    selection: &str,
    cfg: &QueryConfig,
    endpoint: &SearchEndpoint,
) -> Result<SelectionSearch, PipelineError> {
    let selection = match validate_selection(selection, cfg.max_selection_chars) {
        Ok(selection) => selection,
        Err(err) => {
            let err = PipelineError::from(err);
            warn!(error = %err, "selection_rejected");
            if let Some(recorder) = MetricsSpan::start() {
                recorder.record_rejection(&err);
            }
            return Err(err);
        }
    };

    debug!(
        notices = selection.notices.len(),
        kind = %selection.classification.kind(),
        "selection_validated"
    );

    let request = prepare_search(&selection.text, cfg, endpoint)?;
    Ok(SelectionSearch { selection, request })
}
