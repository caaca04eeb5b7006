use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Case transformation applied to headings and titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    /// All lowercase.
    Small,
    /// First letter of every space-separated word uppercased.
    Title,
    /// All uppercase.
    Upper,
    /// Unchanged.
    #[default]
    Default,
}

impl TextCase {
    pub const ALL: [TextCase; 4] = [
        TextCase::Small,
        TextCase::Title,
        TextCase::Upper,
        TextCase::Default,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TextCase::Small => "small",
            TextCase::Title => "title",
            TextCase::Upper => "upper",
            TextCase::Default => "default",
        }
    }

    /// Applies the transformation to `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyblog_core::format::TextCase;
    ///
    /// assert_eq!(TextCase::Title.apply("my blog"), "My Blog");
    /// assert_eq!(TextCase::Upper.apply("my blog"), "MY BLOG");
    /// ```
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextCase::Small => text.to_lowercase(),
            TextCase::Title => text
                .split(' ')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            TextCase::Upper => text.to_uppercase(),
            TextCase::Default => text.to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for TextCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a case name that is not one of [`TextCase::ALL`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid format: \"{0}\". Allowed formats are: small, title, upper, default")]
pub struct UnknownTextCase(pub String);

impl FromStr for TextCase {
    type Err = UnknownTextCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextCase::ALL
            .into_iter()
            .find(|case| case.name() == s)
            .ok_or_else(|| UnknownTextCase(s.to_string()))
    }
}
