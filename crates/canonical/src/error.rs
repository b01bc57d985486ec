use thiserror::Error;

/// Errors raised while validating query configuration.
///
/// Classification itself is total and never produces one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
