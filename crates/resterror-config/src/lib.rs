#![allow(clippy::must_use_candidate)]

//! Exception mapping configuration
//!
//! Mappings are read from a line-oriented properties file whose keys are
//! exception type names (or fragments of them) and whose values are
//! `|`-delimited error templates:
//!
//! ```text
//! restError.baseMoreInfoUrl = http://httpstatus.es/
//! java.lang.IllegalArgumentException = status=400|Unknown file type
//! NotFoundException = 404|The specified resource does not exist.|_exmsg
//! ```

mod error;
mod loader;
pub mod properties;
pub mod source;
pub mod template;

use indexmap::IndexMap;
use resterror_core::RestError;

pub use error::ConfigError;
pub use source::{DirectorySource, EmbeddedSource, ResourceSource, ResourceSources};

/// Name of the configuration resource looked up when none is given
pub const DEFAULT_RESOURCE: &str = "restErrors.properties";

/// Reserved key holding the base URL for synthesized more-info links
pub const BASE_MORE_INFO_URL_KEY: &str = "restError.baseMoreInfoUrl";

/// Parsed and normalized exception mappings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingConfig {
    /// Base URL used to synthesize more-info links
    pub base_more_info_url: Option<String>,
    /// Error templates keyed by type name fragment, in declaration order
    pub mappings: IndexMap<String, RestError>,
}
