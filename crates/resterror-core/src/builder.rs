use http::StatusCode;

use crate::{InvalidStatus, RestError};

/// Incremental construction of a [`RestError`]
///
/// An unset status becomes `500 Internal Server Error` on [`build`](Self::build).
/// An unset code stays `0`, which mapping treats as "inherit the status".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestErrorBuilder {
    status: Option<StatusCode>,
    code: i32,
    message: Option<String>,
    developer_message: Option<String>,
    more_info_url: Option<String>,
}

impl RestErrorBuilder {
    /// Set the HTTP status
    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the HTTP status from its numeric value
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatus`] if the value is not in `100..=599`
    pub fn with_status_code(self, code: i64) -> Result<Self, InvalidStatus> {
        crate::status::status_from_code(code).map(|status| self.with_status(status))
    }

    /// Set the application error code
    #[must_use]
    pub const fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Set the user-facing message
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with_message_opt(Some(message.into()))
    }

    /// Set or clear the user-facing message
    #[must_use]
    pub fn with_message_opt(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Set the developer-facing message
    #[must_use]
    pub fn with_developer_message(self, message: impl Into<String>) -> Self {
        self.with_developer_message_opt(Some(message.into()))
    }

    /// Set or clear the developer-facing message
    #[must_use]
    pub fn with_developer_message_opt(mut self, message: Option<String>) -> Self {
        self.developer_message = message;
        self
    }

    /// Set the more-info link
    #[must_use]
    pub fn with_more_info_url(self, url: impl Into<String>) -> Self {
        self.with_more_info_url_opt(Some(url.into()))
    }

    /// Set or clear the more-info link
    #[must_use]
    pub fn with_more_info_url_opt(mut self, url: Option<String>) -> Self {
        self.more_info_url = url;
        self
    }

    /// Finish building
    pub fn build(self) -> RestError {
        RestError {
            status: self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            code: self.code,
            message: self.message,
            developer_message: self.developer_message,
            more_info_url: self.more_info_url,
        }
    }
}
