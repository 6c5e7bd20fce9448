use indexmap::IndexMap;
use resterror_core::RestError;

/// Error templates keyed by type name fragment
///
/// Iteration follows insertion order, which breaks ties during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: IndexMap<String, RestError>,
}

impl MappingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a template; a replaced key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, template: RestError) -> Option<RestError> {
        self.entries.insert(key.into(), template)
    }

    /// Template stored under exactly `key`
    pub fn get(&self, key: &str) -> Option<&RestError> {
        self.entries.get(key)
    }

    /// Key and template stored under exactly `key`
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &RestError)> {
        self.entries.get_key_value(key).map(|(k, v)| (k.as_str(), v))
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RestError)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<IndexMap<String, RestError>> for MappingTable {
    fn from(entries: IndexMap<String, RestError>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>> FromIterator<(K, RestError)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (K, RestError)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
