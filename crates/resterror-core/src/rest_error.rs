use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{RestErrorBody, RestErrorBuilder};

/// Base URL used by [`RestError::from_status`] for the more-info link
pub const GENERIC_MORE_INFO_BASE_URL: &str = "http://httpstatus.es/";

/// Error value returned to API consumers
///
/// Immutable once built. Serializes to
/// `{status, code, message?, developerMessage?, moreInfo?}` with absent
/// fields omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RestErrorBody", from = "RestErrorBody")]
pub struct RestError {
    pub(crate) status: StatusCode,
    pub(crate) code: i32,
    pub(crate) message: Option<String>,
    pub(crate) developer_message: Option<String>,
    pub(crate) more_info_url: Option<String>,
}

impl RestError {
    /// Start building a new error
    pub fn builder() -> RestErrorBuilder {
        RestErrorBuilder::default()
    }

    /// Builder pre-populated with every field of this error
    pub fn to_builder(&self) -> RestErrorBuilder {
        Self::builder()
            .with_status(self.status)
            .with_code(self.code)
            .with_message_opt(self.message.clone())
            .with_developer_message_opt(self.developer_message.clone())
            .with_more_info_url_opt(self.more_info_url.clone())
    }

    /// Generic error for a status
    ///
    /// The code mirrors the status, the message is the canonical reason
    /// phrase and the more-info link points at [`GENERIC_MORE_INFO_BASE_URL`].
    pub fn from_status(status: StatusCode) -> Self {
        let builder = Self::builder()
            .with_status(status)
            .with_code(i32::from(status.as_u16()))
            .with_more_info_url(format!("{GENERIC_MORE_INFO_BASE_URL}{}", status.as_u16()));

        let builder = match status.canonical_reason() {
            Some(reason) => builder.with_message(reason),
            None => builder,
        };

        builder.build()
    }

    /// Generic error for a status with a custom message
    pub fn from_status_with_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::from_status(status).to_builder().with_message(message).build()
    }

    /// HTTP status
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Application-specific error code
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Message safe to show to end users
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Message aimed at API developers
    pub fn developer_message(&self) -> Option<&str> {
        self.developer_message.as_deref()
    }

    /// Link to further documentation about the error
    pub fn more_info_url(&self) -> Option<&str> {
        self.more_info_url.as_deref()
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}{{", self.status.as_u16(), self.code)?;
        if let Some(ref message) = self.message {
            f.write_str(message)?;
        }
        if let Some(ref developer_message) = self.developer_message {
            write!(f, ", {developer_message}")?;
        }
        if let Some(ref more_info_url) = self.more_info_url {
            write!(f, ", {more_info_url}")?;
        }
        f.write_str("}")
    }
}
