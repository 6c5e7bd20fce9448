//! HTTP status validation
//!
//! Only statuses in the `100..=599` range are accepted.

use http::StatusCode;

use crate::InvalidStatus;

/// Lowest accepted status code
pub const MIN_STATUS: u16 = 100;

/// Highest accepted status code
pub const MAX_STATUS: u16 = 599;

/// Convert an integer into a [`StatusCode`]
///
/// # Errors
///
/// Returns [`InvalidStatus`] if the value is outside `100..=599`
pub fn status_from_code(code: i64) -> Result<StatusCode, InvalidStatus> {
    u16::try_from(code)
        .ok()
        .filter(|value| (MIN_STATUS..=MAX_STATUS).contains(value))
        .and_then(|value| StatusCode::from_u16(value).ok())
        .ok_or(InvalidStatus(code))
}

/// Whether an integer is an accepted HTTP status code
pub fn is_valid_status(code: i64) -> bool {
    status_from_code(code).is_ok()
}
