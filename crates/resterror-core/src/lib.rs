#![allow(clippy::must_use_candidate)]

//! REST error values produced from runtime failures
//!
//! A [`RestError`] carries an HTTP status, an application error code and
//! the messages returned to API consumers. Failing values participate in
//! mapping through the [`Exception`] trait, which exposes their type
//! ancestry as plain data.

mod builder;
mod error;
mod exception;
#[cfg(feature = "http")]
mod response;
mod resolved;
mod rest_error;
pub mod status;
mod wire;

pub use builder::RestErrorBuilder;
pub use error::InvalidStatus;
pub use exception::{Exception, ROOT_TYPE_NAME, RaisedError};
pub use resolved::ResolvedError;
pub use rest_error::{GENERIC_MORE_INFO_BASE_URL, RestError};
pub use wire::RestErrorBody;
