//! Configuration resource lookup
//!
//! Resources are looked up by name across an ordered list of sources;
//! the first source that has the resource wins.

use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::ConfigError;

/// Environment variable naming the caller's configuration directory
pub const CONFIG_DIR_ENV: &str = "RESTERROR_CONFIG_DIR";

/// Stream over a found resource
pub type ResourceStream = Box<dyn Read + Send>;

/// A place configuration resources can be read from
pub trait ResourceSource: Send + Sync {
    /// Human-readable location, used in logs and errors
    fn location(&self) -> String;

    /// Open a resource by name
    ///
    /// Returns `Ok(None)` if this source does not have the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource exists but cannot be opened
    fn open(&self, resource: &str) -> io::Result<Option<ResourceStream>>;
}

/// Resources stored as files under a directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory resources are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSource for DirectorySource {
    fn location(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn open(&self, resource: &str) -> io::Result<Option<ResourceStream>> {
        match std::fs::File::open(self.root.join(resource)) {
            Ok(file) => Ok(Some(Box::new(BufReader::new(file)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Resources held in memory
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    label: String,
    resources: IndexMap<String, String>,
}

impl EmbeddedSource {
    /// Create an empty in-memory source
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            resources: IndexMap::new(),
        }
    }

    /// Add or replace a resource
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(name.into(), text.into());
        self
    }
}

impl ResourceSource for EmbeddedSource {
    fn location(&self) -> String {
        format!("embedded {}", self.label)
    }

    fn open(&self, resource: &str) -> io::Result<Option<ResourceStream>> {
        Ok(self
            .resources
            .get(resource)
            .map(|text| Box::new(Cursor::new(text.clone().into_bytes())) as ResourceStream))
    }
}

/// Ordered list of resource sources
#[derive(Default)]
pub struct ResourceSources {
    sources: Vec<Box<dyn ResourceSource>>,
}

impl std::fmt::Debug for ResourceSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sources.iter().map(|source| source.location()))
            .finish()
    }
}

impl ResourceSources {
    /// Create an empty list, in which every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source, consulted after those already added
    #[must_use]
    pub fn with_source(mut self, source: impl ResourceSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Standard lookup order
    ///
    /// 1. caller: the directory named by `RESTERROR_CONFIG_DIR`, if set
    /// 2. library: the current working directory
    /// 3. process: the directory containing the running executable
    pub fn standard() -> Self {
        let mut sources = Self::new();

        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            sources = sources.with_source(DirectorySource::new(dir));
        }
        if let Ok(dir) = std::env::current_dir() {
            sources = sources.with_source(DirectorySource::new(dir));
        }
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            sources = sources.with_source(DirectorySource::new(dir));
        }

        sources
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether there are no sources
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Open a resource from the first source that has it
    ///
    /// Returns the stream together with the location it came from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if a source has the resource but cannot
    /// open it
    pub fn open(&self, resource: &str) -> Result<Option<(String, ResourceStream)>, ConfigError> {
        for source in &self.sources {
            match source.open(resource) {
                Ok(Some(stream)) => return Ok(Some((source.location(), stream))),
                Ok(None) => tracing::trace!(resource, location = %source.location(), "resource not in source"),
                Err(source_error) => {
                    return Err(ConfigError::Io {
                        resource: resource.to_owned(),
                        location: source.location(),
                        source: source_error,
                    });
                }
            }
        }

        Ok(None)
    }
}
