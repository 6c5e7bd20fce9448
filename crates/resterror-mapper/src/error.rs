use resterror_config::ConfigError;
use thiserror::Error;

/// Errors raised by [`ExceptionMapper`](crate::ExceptionMapper)
#[derive(Debug, Error)]
pub enum MapperError {
    /// Registration with an empty key
    #[error("mapping key must not be empty")]
    InvalidKey,

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}
