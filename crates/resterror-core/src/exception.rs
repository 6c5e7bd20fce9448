use std::fmt;

/// Name of the root of every type chain built by [`RaisedError::from_error`]
pub const ROOT_TYPE_NAME: &str = "std::error::Error";

/// A failing value that can be mapped to a REST error
///
/// Rust has no runtime class hierarchy, so implementors declare their
/// ancestry as data: fully-qualified type names from the concrete type up
/// to the root type. Mapping matches configured keys against these names.
pub trait Exception: fmt::Debug + Send + Sync {
    /// Type names, most-derived first, ending with the root type
    fn type_chain(&self) -> Vec<&str>;

    /// Message carried by this failure, if any
    fn message(&self) -> Option<&str>;

    /// Fully-qualified name of the concrete type
    fn type_name(&self) -> Option<&str> {
        self.type_chain().into_iter().next()
    }
}

/// Owned [`Exception`] with an explicit type chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    type_chain: Vec<String>,
    message: Option<String>,
}

impl RaisedError {
    /// Create a failure with the given ancestry and no message
    pub fn new<I, S>(type_chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_chain: type_chain.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// Attach a message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Capture a Rust error value
    ///
    /// The chain is the error's type name followed by [`ROOT_TYPE_NAME`];
    /// the message is its `Display` output.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Self::new([std::any::type_name::<E>(), ROOT_TYPE_NAME]).with_message(error.to_string())
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = self.type_chain.first().map_or("<unknown>", String::as_str);
        match self.message {
            Some(ref message) => write!(f, "{type_name}: {message}"),
            None => f.write_str(type_name),
        }
    }
}

impl std::error::Error for RaisedError {}

impl Exception for RaisedError {
    fn type_chain(&self) -> Vec<&str> {
        self.type_chain.iter().map(String::as_str).collect()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_is_most_derived_first() {
        let error = RaisedError::new(["java.lang.IllegalArgumentException", "java.lang.RuntimeException"]);

        assert_eq!(error.type_name(), Some("java.lang.IllegalArgumentException"));
        assert_eq!(error.type_chain().len(), 2);
        assert_eq!(error.message(), None);
    }

    #[test]
    fn captures_rust_errors() {
        let parse_error = "x".parse::<u32>().unwrap_err();
        let error = RaisedError::from_error(&parse_error);

        assert!(error.type_name().unwrap().ends_with("ParseIntError"));
        assert_eq!(error.type_chain().last(), Some(&ROOT_TYPE_NAME));
        assert_eq!(error.message(), Some("invalid digit found in string"));
    }

    #[test]
    fn display_includes_message() {
        let error = RaisedError::new(["app.Boom"]).with_message("boom");
        assert_eq!(error.to_string(), "app.Boom: boom");
    }
}
