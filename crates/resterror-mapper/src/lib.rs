#![allow(clippy::must_use_candidate)]

//! Map failing values to REST errors
//!
//! An [`ExceptionMapper`] owns a table of error templates keyed by type
//! name fragments. For each failure it picks the best template (exact type
//! name first, then the shallowest ancestor containing a key) and fills in
//! the failure's own message where the template asks for it.

mod error;
mod mapper;
#[cfg(feature = "http")]
mod responder;
pub mod resolver;
mod table;

pub use error::MapperError;
pub use mapper::{EXCEPTION_MESSAGE_SENTINEL, ExceptionMapper};
#[cfg(feature = "http")]
pub use responder::MappedError;
pub use resterror_config::{DEFAULT_RESOURCE, MappingConfig, ResourceSources};
pub use resterror_core::{Exception, RaisedError, ResolvedError, RestError};
pub use table::MappingTable;
