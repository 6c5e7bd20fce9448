use std::io::Read;
use std::path::Path;

use crate::properties::{self, Properties};
use crate::template::{normalize, parse_template};
use crate::{BASE_MORE_INFO_URL_KEY, ConfigError, DEFAULT_RESOURCE, MappingConfig, ResourceSources};

impl MappingConfig {
    /// Build mappings from tokenized properties
    ///
    /// Removes the reserved base-URL key, then parses and normalizes every
    /// remaining value as an error template.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] for the first malformed template
    pub fn from_properties(mut properties: Properties) -> Result<Self, ConfigError> {
        let base_more_info_url = properties.shift_remove(BASE_MORE_INFO_URL_KEY);

        let mappings = properties
            .into_iter()
            .map(|(key, value)| {
                let template = parse_template(&value).map_err(|e| e.for_mapping(&key))?;
                let template = normalize(&template, base_more_info_url.as_deref());
                Ok((key, template))
            })
            .collect::<Result<_, ConfigError>>()?;

        Ok(Self {
            base_more_info_url,
            mappings,
        })
    }

    /// Parse mappings from configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Self::from_properties(properties::parse(text)?)
    }

    /// Read mappings from a stream
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read or its content is malformed
    pub fn from_reader(reader: impl Read, resource: &str, location: &str) -> Result<Self, ConfigError> {
        Self::from_properties(properties::parse_reader(reader, resource, location)?)
    }

    /// Read mappings from a file that must exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed
    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let location = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            resource: location.clone(),
            location: "filesystem".to_owned(),
            source,
        })?;

        let config = Self::from_reader(std::io::BufReader::new(file), &location, "filesystem")?;
        tracing::info!(path = %location, mappings = config.mappings.len(), "loaded exception mappings");

        Ok(config)
    }

    /// Look up a named resource and read mappings from it
    ///
    /// A resource missing from every source is not an error: the result
    /// is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a found resource cannot be read or is malformed
    pub fn load(resource: &str, sources: &ResourceSources) -> Result<Self, ConfigError> {
        let Some((location, stream)) = sources.open(resource)? else {
            tracing::debug!(resource, "exception mapping resource not found; starting with no mappings");
            return Ok(Self::default());
        };

        let config = Self::from_reader(stream, resource, &location)?;
        tracing::info!(
            resource,
            location = %location,
            mappings = config.mappings.len(),
            "loaded exception mappings"
        );

        Ok(config)
    }

    /// Load [`DEFAULT_RESOURCE`] from the standard sources
    ///
    /// # Errors
    ///
    /// Returns an error if a found resource cannot be read or is malformed
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_RESOURCE, &ResourceSources::standard())
    }
}
