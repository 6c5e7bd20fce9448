use thiserror::Error;

/// A numeric status that is not a recognised HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid HTTP status code: {0}")]
pub struct InvalidStatus(pub i64);
