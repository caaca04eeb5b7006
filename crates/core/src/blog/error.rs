use std::fmt;

use thiserror::Error;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// A required field is absent (or `null`).
    Missing,
    /// The field holds the wrong JSON type.
    WrongType { expected: &'static str },
    /// The field is a string but not a valid email address.
    InvalidEmail,
    /// A required text field is empty.
    Empty,
    /// The enriched author does not belong to the post.
    AuthorMismatch { user_id: u64, author_id: u64 },
    /// No author was resolved for the post's `userId`.
    UnresolvedAuthor { user_id: u64 },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Missing => write!(f, "missing"),
            IssueKind::WrongType { expected } => write!(f, "expected {expected}"),
            IssueKind::InvalidEmail => write!(f, "not a valid email address"),
            IssueKind::Empty => write!(f, "must not be empty"),
            IssueKind::AuthorMismatch { user_id, author_id } => {
                write!(f, "author {author_id} does not match userId {user_id}")
            }
            IssueKind::UnresolvedAuthor { user_id } => {
                write!(f, "no author resolved for userId {user_id}")
            }
        }
    }
}

/// A single offending field. `path` uses `$` for the payload root and
/// `[i].field` for array elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// A payload did not match the expected shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {entity} payload: {}", format_issues(.issues))]
pub struct ValidationError {
    /// What was being validated, e.g. `"author"` or `"post list"`.
    pub entity: &'static str,
    /// Every offending field, in payload order.
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(entity: &'static str, issues: Vec<FieldIssue>) -> Self {
        Self { entity, issues }
    }

    /// Returns true if any issue was reported for `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }

    /// Returns the issue reported for `path`, if any.
    pub fn issue_at(&self, path: &str) -> Option<&IssueKind> {
        self.issues
            .iter()
            .find(|issue| issue.path == path)
            .map(|issue| &issue.kind)
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
