//! Mapping configuration and failure fixtures for integration tests

use std::fmt::Write as _;
use std::sync::Arc;

use resterror_mapper::{ExceptionMapper, RaisedError};

/// Builder for mapping configuration text
#[derive(Default)]
pub struct MappingBuilder {
    text: String,
}

impl MappingBuilder {
    /// Start with no mappings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for synthesized more-info links
    pub fn with_base_more_info_url(self, url: &str) -> Self {
        self.with_line("restError.baseMoreInfoUrl", url)
    }

    /// Add a mapping line
    pub fn with_mapping(self, key: &str, template: &str) -> Self {
        self.with_line(key, template)
    }

    fn with_line(mut self, key: &str, value: &str) -> Self {
        writeln!(self.text, "{key} = {value}").expect("writing to a String never fails");
        self
    }

    /// Configuration text as it would appear on disk
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Build a shared mapper from the configuration
    pub fn build(&self) -> Arc<ExceptionMapper> {
        Arc::new(ExceptionMapper::parse(&self.text).expect("valid test configuration"))
    }
}

/// `java.lang.IllegalArgumentException` with its ancestry
pub fn illegal_argument(message: &str) -> RaisedError {
    RaisedError::new([
        "java.lang.IllegalArgumentException",
        "java.lang.RuntimeException",
        "java.lang.Exception",
        "java.lang.Throwable",
    ])
    .with_message(message)
}

/// `javax.ws.rs.NotFoundException` with its ancestry
pub fn not_found(message: &str) -> RaisedError {
    RaisedError::new([
        "javax.ws.rs.NotFoundException",
        "javax.ws.rs.ClientErrorException",
        "javax.ws.rs.WebApplicationException",
        "java.lang.RuntimeException",
        "java.lang.Exception",
        "java.lang.Throwable",
    ])
    .with_message(message)
}

/// `java.lang.ReflectiveOperationException` with its ancestry
pub fn reflective_operation() -> RaisedError {
    RaisedError::new([
        "java.lang.ReflectiveOperationException",
        "java.lang.Exception",
        "java.lang.Throwable",
    ])
}
