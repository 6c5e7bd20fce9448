use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::{Exception, RestError};

/// Error produced for one specific failure
///
/// Keeps a handle on the originating exception for diagnostics; only the
/// [`RestError`] part is serialized.
#[derive(Debug, Clone)]
pub struct ResolvedError {
    error: RestError,
    exception: Arc<dyn Exception>,
}

impl ResolvedError {
    /// Pair an error value with the failure it was built for
    pub fn new(error: RestError, exception: Arc<dyn Exception>) -> Self {
        Self { error, exception }
    }

    /// The error value
    pub const fn error(&self) -> &RestError {
        &self.error
    }

    /// The originating failure
    pub fn exception(&self) -> &dyn Exception {
        self.exception.as_ref()
    }

    /// Discard the exception and keep the error value
    pub fn into_error(self) -> RestError {
        self.error
    }
}

impl Deref for ResolvedError {
    type Target = RestError;

    fn deref(&self) -> &Self::Target {
        &self.error
    }
}

impl Serialize for ResolvedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.error.serialize(serializer)
    }
}
