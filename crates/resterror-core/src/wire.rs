use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::RestError;

/// Wire shape of a [`RestError`]
///
/// `status` is optional so that an unrecognised numeric status only
/// invalidates that field; the rest of the payload still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestErrorBody {
    /// HTTP status, `None` when absent or unrecognised
    #[serde(
        default,
        serialize_with = "serialize_status",
        deserialize_with = "deserialize_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<StatusCode>,
    /// Application error code
    pub code: i32,
    /// User-facing message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Developer-facing message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_message: Option<String>,
    /// More-info link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

#[allow(clippy::ref_option)]
fn serialize_status<S: Serializer>(status: &Option<StatusCode>, serializer: S) -> Result<S::Ok, S::Error> {
    match status {
        Some(status) => serializer.serialize_u16(status.as_u16()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<StatusCode>, D::Error> {
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|code| crate::status::status_from_code(code).ok()))
}

impl From<RestError> for RestErrorBody {
    fn from(error: RestError) -> Self {
        Self {
            status: Some(error.status),
            code: error.code,
            message: error.message,
            developer_message: error.developer_message,
            more_info: error.more_info_url,
        }
    }
}

impl From<RestErrorBody> for RestError {
    fn from(body: RestErrorBody) -> Self {
        let builder = Self::builder()
            .with_code(body.code)
            .with_message_opt(body.message)
            .with_developer_message_opt(body.developer_message)
            .with_more_info_url_opt(body.more_info);

        let builder = match body.status {
            Some(status) => builder.with_status(status),
            None => builder,
        };

        builder.build()
    }
}
