//! Error template parsing and normalization
//!
//! A template value is up to five `|`-delimited tokens. Each token is an
//! explicit `key=value` pair (`status`, `code`, `msg`, `devMsg`,
//! `moreInfoUrl`, case-insensitive) or a positional value assigned to the
//! first free slot it fits: status, code, message, developer message,
//! more-info URL. A positive integer in the status slot must be a valid
//! HTTP status.

use resterror_core::RestError;

use crate::ConfigError;
use crate::properties::ESCAPE;

/// Delimiter between template tokens
pub const DELIMITER: char = '|';

/// Maximum number of tokens in a template
pub const MAX_VALUES: usize = 5;

/// Values that clear a message or developer message
const CLEARED_VALUES: [&str; 2] = ["null", "off"];

#[derive(Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
struct Slots {
    status: bool,
    code: bool,
    message: bool,
    developer_message: bool,
    more_info_url: bool,
}

/// Parse one template value
///
/// # Errors
///
/// Returns an error if the value has no tokens or more than
/// [`MAX_VALUES`], or if an explicit `status=`/`code=` is not an integer
/// or the status is not a valid HTTP status
pub fn parse_template(raw: &str) -> Result<RestError, ConfigError> {
    if raw.is_empty() {
        return Err(ConfigError::EmptyTemplate);
    }

    let tokens: Vec<&str> = raw.split(DELIMITER).collect();
    if tokens.len() > MAX_VALUES {
        return Err(ConfigError::TooManyValues { count: tokens.len() });
    }

    let mut builder = RestError::builder();
    let mut set = Slots::default();

    for token in tokens {
        let token = token.trim();

        if let Some((key, value)) = split_pair(token) {
            let value = Some(value).filter(|v| !v.is_empty());

            match key.to_ascii_lowercase().as_str() {
                "status" => {
                    let status = required_int("status", value)?;
                    let status = resterror_core::status::status_from_code(i64::from(status))
                        .map_err(|e| ConfigError::InvalidStatus(e.0))?;
                    builder = builder.with_status(status);
                    set.status = true;
                }
                "code" => {
                    builder = builder.with_code(required_int("code", value)?);
                    set.code = true;
                }
                "msg" => {
                    builder = builder.with_message_opt(value.map(str::to_owned));
                    set.message = true;
                }
                "devmsg" => {
                    builder = builder.with_developer_message_opt(value.map(str::to_owned));
                    set.developer_message = true;
                }
                "moreinfourl" => {
                    builder = builder.with_more_info_url_opt(value.map(str::to_owned));
                    set.more_info_url = true;
                }
                _ => {}
            }

            continue;
        }

        if !set.status
            && let Some(value) = positional_int(token).filter(|&v| v > 0)
        {
            let status = resterror_core::status::status_from_code(i64::from(value))
                .map_err(|e| ConfigError::InvalidStatus(e.0))?;
            builder = builder.with_status(status);
            set.status = true;
        } else if !set.code
            && let Some(code) = positional_int(token).filter(|&v| v > 0)
        {
            builder = builder.with_code(code);
            set.code = true;
        } else if !set.message {
            builder = builder.with_message(token);
            set.message = true;
        } else if !set.developer_message {
            builder = builder.with_developer_message(token);
            set.developer_message = true;
        } else if !set.more_info_url {
            builder = builder.with_more_info_url(token);
            set.more_info_url = true;
        }
    }

    Ok(builder.build())
}

/// Normalize a parsed template
///
/// - a code `<= 0` inherits the status
/// - a message or developer message of `null`/`off` is cleared
/// - a missing more-info URL is synthesized as `base_more_info_url` + code
pub fn normalize(template: &RestError, base_more_info_url: Option<&str>) -> RestError {
    let mut builder = template.to_builder();

    let code = if template.code() <= 0 {
        let code = i32::from(template.status().as_u16());
        builder = builder.with_code(code);
        code
    } else {
        template.code()
    };

    if is_cleared(template.message()) {
        builder = builder.with_message_opt(None);
    }
    if is_cleared(template.developer_message()) {
        builder = builder.with_developer_message_opt(None);
    }

    if template.more_info_url().is_none()
        && let Some(base) = base_more_info_url
    {
        builder = builder.with_more_info_url(format!("{base}{code}"));
    }

    builder.build()
}

fn is_cleared(value: Option<&str>) -> bool {
    value.is_some_and(|v| CLEARED_VALUES.iter().any(|cleared| v.eq_ignore_ascii_case(cleared)))
}

/// Split at the first `=` not preceded by the escape character
fn split_pair(token: &str) -> Option<(&str, &str)> {
    let mut previous = None;

    for (offset, c) in token.char_indices() {
        if c == '=' && previous != Some(ESCAPE) {
            return Some((token[..offset].trim(), token[offset + 1..].trim()));
        }
        previous = Some(c);
    }

    None
}

/// Integer for an explicit pair, clamped to `-1`
fn required_int(element: &str, value: Option<&str>) -> Result<i32, ConfigError> {
    value
        .and_then(|v| v.parse::<i32>().ok())
        .map(|v| v.max(-1))
        .ok_or_else(|| ConfigError::NotAnInteger {
            element: element.to_owned(),
            found: value.unwrap_or_default().to_owned(),
        })
}

fn positional_int(token: &str) -> Option<i32> {
    token.parse::<i32>().ok().map(|v| v.max(-1))
}
