//! Parsing of required route and query parameters.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised when a required parameter is absent or malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("Missing required parameter `{name}`")]
    Missing { name: &'static str },
    #[error("Invalid parameter `{name}`: {value:?} is not a {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("Invalid parameter `{name}`: expected a single value, got {count}")]
    NotASingleValue { name: &'static str, count: usize },
}

/// Parses a required parameter.
///
/// An absent or blank value is [`ParamError::Missing`]; a value that does not
/// parse into `T` is [`ParamError::Invalid`].
///
/// # Examples
///
/// ```
/// use tinyblog_core::params::{parse_required, ParamError};
///
/// assert_eq!(parse_required::<u64>("id", Some("42"), "post id"), Ok(42));
/// assert_eq!(
///     parse_required::<u64>("id", None, "post id"),
///     Err(ParamError::Missing { name: "id" })
/// );
/// ```
pub fn parse_required<T: FromStr>(
    name: &'static str,
    value: Option<&str>,
    expected: &'static str,
) -> Result<T, ParamError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ParamError::Missing { name })?;

    raw.parse().map_err(|_| ParamError::Invalid {
        name,
        value: raw.to_string(),
        expected,
    })
}

/// Parses a required non-negative count.
///
/// Unlike [`parse_required`], a digit string too large for `usize` saturates to
/// `usize::MAX` instead of failing; signs and non-digits are still rejected.
pub fn parse_count(name: &'static str, value: Option<&str>) -> Result<usize, ParamError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ParamError::Missing { name })?;

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParamError::Invalid {
            name,
            value: raw.to_string(),
            expected: "non-negative integer",
        });
    }

    Ok(raw.parse().unwrap_or(usize::MAX))
}
