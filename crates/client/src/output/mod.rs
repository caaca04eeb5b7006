//! Output formatting functions.

pub mod pretty;

/// Serialize a value for `--format json`; pretty output goes through [`pretty`].
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
