use std::sync::{Arc, Mutex, PoisonError, RwLock};

use resterror_config::{MappingConfig, ResourceSources};
use resterror_core::{Exception, ResolvedError, RestError};

use crate::{MapperError, MappingTable, resolver};

/// Template value replaced by the failure's own message
pub const EXCEPTION_MESSAGE_SENTINEL: &str = "_exmsg";

/// Registry of error templates and factory for resolved errors
///
/// The table is an immutable snapshot behind an `Arc`. Readers clone the
/// `Arc` and resolve against it without holding any lock; writers copy the
/// current snapshot, modify the copy and swap it in, one writer at a time.
#[derive(Debug, Default)]
pub struct ExceptionMapper {
    table: RwLock<Arc<MappingTable>>,
    writer: Mutex<()>,
}

impl ExceptionMapper {
    /// Create a mapper with no mappings, in which every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper over an existing table
    pub fn from_table(table: MappingTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
            writer: Mutex::new(()),
        }
    }

    /// Create a mapper from loaded configuration
    pub fn from_config(config: MappingConfig) -> Self {
        Self::from_table(config.mappings.into())
    }

    /// Create a mapper from configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed
    pub fn parse(text: &str) -> Result<Self, MapperError> {
        Ok(Self::from_config(MappingConfig::parse(text)?))
    }

    /// Create a mapper from a named resource
    ///
    /// A resource missing from every source yields an empty mapper.
    ///
    /// # Errors
    ///
    /// Returns an error if a found resource cannot be read or is malformed
    pub fn from_resource(resource: &str, sources: &ResourceSources) -> Result<Self, MapperError> {
        Ok(Self::from_config(MappingConfig::load(resource, sources)?))
    }

    /// Create a mapper from `restErrors.properties` in the standard sources
    ///
    /// # Errors
    ///
    /// Returns an error if a found resource cannot be read or is malformed
    pub fn from_default_resource() -> Result<Self, MapperError> {
        Ok(Self::from_config(MappingConfig::load_default()?))
    }

    /// Current table snapshot
    pub fn snapshot(&self) -> Arc<MappingTable> {
        Arc::clone(&self.table.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of mappings
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether there are no mappings
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Add or replace the template for a key
    ///
    /// Readers in progress keep the snapshot they started with.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::InvalidKey`] if the key is empty or blank;
    /// the table is left unchanged
    pub fn register(&self, key: impl Into<String>, template: RestError) -> Result<(), MapperError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(MapperError::InvalidKey);
        }

        // One writer at a time; readers keep using the old snapshot
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut next = MappingTable::clone(&self.snapshot());
        tracing::debug!(key = %key, template = %template, "registering exception mapping");
        next.insert(key, template);

        *self.table.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);

        Ok(())
    }

    /// Add or replace the template keyed by a Rust type's name
    ///
    /// Matches failures captured with [`RaisedError::from_error`](resterror_core::RaisedError::from_error).
    ///
    /// # Errors
    ///
    /// Never fails in practice; type names are not empty
    pub fn register_type<E: ?Sized>(&self, template: RestError) -> Result<(), MapperError> {
        self.register(std::any::type_name::<E>(), template)
    }

    /// Template that best matches a failure
    pub fn template_for(&self, exception: &dyn Exception) -> Option<RestError> {
        let table = self.snapshot();
        let type_chain = exception.type_chain();

        let (key, template) = resolver::resolve(&type_chain, &table)?;
        tracing::debug!(
            exception_type = type_chain.first().copied().unwrap_or_default(),
            mapping = key,
            template = %template,
            "resolved error template"
        );

        Some(template.clone())
    }

    /// Error value for a failure, with message sentinels substituted
    pub fn error_for(&self, exception: &dyn Exception) -> Option<RestError> {
        let template = self.template_for(exception)?;

        // Templates are copied, never mutated
        let error = RestError::builder()
            .with_status(template.status())
            .with_code(template.code())
            .with_more_info_url_opt(template.more_info_url().map(str::to_owned))
            .with_message_opt(substitute(template.message(), exception))
            .with_developer_message_opt(substitute(template.developer_message(), exception))
            .build();

        Some(error)
    }

    /// Resolved error for a failure
    ///
    /// Returns `None` when no mapping matches; callers fall back to a
    /// generic response.
    pub fn build_error_for(&self, exception: Arc<dyn Exception>) -> Option<ResolvedError> {
        let error = self.error_for(exception.as_ref())?;
        Some(ResolvedError::new(error, exception))
    }
}

impl From<MappingConfig> for ExceptionMapper {
    fn from(config: MappingConfig) -> Self {
        Self::from_config(config)
    }
}

fn substitute(value: Option<&str>, exception: &dyn Exception) -> Option<String> {
    match value {
        Some(value) if value.eq_ignore_ascii_case(EXCEPTION_MESSAGE_SENTINEL) => exception.message().map(str::to_owned),
        other => other.map(str::to_owned),
    }
}
