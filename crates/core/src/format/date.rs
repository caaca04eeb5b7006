use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Supported timestamp layouts for page envelopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `Friday, November 22, 2024, 04:35 PM`
    #[default]
    Default,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Default => "%A, %B %-d, %Y, %I:%M %p",
        }
    }
}

/// Formats `timestamp` with the given layout.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tinyblog_core::format::{format_timestamp, DateFormat};
///
/// let at = Utc.with_ymd_and_hms(2024, 11, 22, 16, 35, 0).unwrap();
/// assert_eq!(
///     format_timestamp(&at, DateFormat::Default),
///     "Friday, November 22, 2024, 04:35 PM"
/// );
/// ```
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>, format: DateFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(format.pattern()).to_string()
}

/// The current local time, formatted with the given layout.
pub fn current_date(format: DateFormat) -> String {
    format_timestamp(&Local::now(), format)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_morning_uses_am_and_unpadded_day() {
        let at = Utc.with_ymd_and_hms(2025, 3, 2, 9, 5, 0).unwrap();
        assert_eq!(
            format_timestamp(&at, DateFormat::Default),
            "Sunday, March 2, 2025, 09:05 AM"
        );
    }

    #[test]
    fn test_current_date_is_not_empty() {
        let now = current_date(DateFormat::Default);
        assert!(now.ends_with("AM") || now.ends_with("PM"));
    }
}
