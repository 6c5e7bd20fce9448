use thiserror::Error;

/// Errors raised while reading exception mapping configuration
///
/// All of these are fatal at load time: a mapper is never built from a
/// malformed file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A logical line has no key or no value
    #[error("line {line}: entry must contain a key and a value")]
    MissingKeyOrValue {
        /// Physical line on which the logical line ended (1-based)
        line: usize,
    },

    /// Template has no values at all
    #[error("template must contain at least one value")]
    EmptyTemplate,

    /// Template has more values than there are fields
    #[error("template has {count} values, at most 5 are allowed (status, code, msg, devMsg, moreInfoUrl)")]
    TooManyValues {
        /// Number of `|`-delimited values found
        count: usize,
    },

    /// Explicit `status=` or `code=` with a non-integer value
    #[error("configuration element '{element}' requires an integer value, found: {found}")]
    NotAnInteger {
        /// Element name (`status` or `code`)
        element: String,
        /// Offending value
        found: String,
    },

    /// Explicit `status=` outside the accepted HTTP status range
    #[error("configuration element 'status' is not a valid HTTP status: {0}")]
    InvalidStatus(i64),

    /// A template failed to parse
    #[error("invalid mapping for '{key}': {source}")]
    Mapping {
        /// Mapping key whose template is malformed
        key: String,
        /// Underlying template error
        source: Box<ConfigError>,
    },

    /// Reading a configuration resource failed
    #[error("failed to read '{resource}' from {location}: {source}")]
    Io {
        /// Resource name
        resource: String,
        /// Where the resource was found
        location: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Attach the mapping key a template error belongs to
    pub(crate) fn for_mapping(self, key: &str) -> Self {
        Self::Mapping {
            key: key.to_owned(),
            source: Box::new(self),
        }
    }
}
