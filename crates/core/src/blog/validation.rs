//! Shape validation of upstream JSON payloads.
//!
//! Validation walks the raw [`serde_json::Value`] and records every offending
//! field instead of stopping at the first one, so callers can report the whole
//! mismatch. A payload that passes is converted into its typed record.

use email_address::EmailAddress;
use serde_json::{Map, Value};

use super::error::{FieldIssue, IssueKind, ValidationError};
use super::types::{Author, AuthorPost, CreatedPost, NewPost, Post, RawPost};

/// Validates an author payload.
///
/// # Examples
///
/// ```
/// use tinyblog_core::blog::validate_author;
///
/// let author = validate_author(&serde_json::json!({
///     "id": 7, "name": "X", "email": "x@x.com"
/// })).unwrap();
/// assert_eq!(author.id, 7);
///
/// let err = validate_author(&serde_json::json!({
///     "id": 7, "name": "X", "email": "not-an-email"
/// })).unwrap_err();
/// assert!(err.has_issue_at("email"));
/// ```
pub fn validate_author(value: &Value) -> Result<Author, ValidationError> {
    let mut issues = Vec::new();
    let author = check_author(value, "", &mut issues);
    finish("author", author, issues)
}

/// Validates a single raw (unenriched) post payload.
pub fn validate_raw_post(value: &Value) -> Result<RawPost, ValidationError> {
    let mut issues = Vec::new();
    let post = check_raw_post(value, "", &mut issues);
    finish("post", post, issues)
}

/// Validates an array of raw (unenriched) post payloads.
pub fn validate_raw_posts(value: &Value) -> Result<Vec<RawPost>, ValidationError> {
    let mut issues = Vec::new();
    let posts = check_array(value, &mut issues, check_raw_post);
    finish("post list", posts, issues)
}

/// Validates a single enriched post payload, including its nested author.
pub fn validate_post(value: &Value) -> Result<Post, ValidationError> {
    let mut issues = Vec::new();
    let post = check_post(value, "", &mut issues);
    finish("post", post, issues)
}

/// Validates an array of enriched post payloads.
pub fn validate_posts(value: &Value) -> Result<Vec<Post>, ValidationError> {
    let mut issues = Vec::new();
    let posts = check_array(value, &mut issues, check_post);
    finish("post list", posts, issues)
}

/// Validates the minimal post array served under `/users/{id}/posts`.
pub fn validate_author_posts(value: &Value) -> Result<Vec<AuthorPost>, ValidationError> {
    let mut issues = Vec::new();
    let posts = check_array(value, &mut issues, check_author_post);
    finish("author post list", posts, issues)
}

/// Validates the upstream echo of a created post.
pub fn validate_created_post(value: &Value) -> Result<CreatedPost, ValidationError> {
    let mut issues = Vec::new();
    let post = check_object(value, "", &mut issues).and_then(|fields| {
        let id = require_id(fields, "", "id", &mut issues);
        let title = require_string(fields, "", "title", &mut issues);
        let body = require_string(fields, "", "body", &mut issues);
        let user_id = optional_id(fields, "", "userId", &mut issues);
        Some(CreatedPost {
            id: id?,
            title: title?,
            body: body?,
            user_id: user_id?,
        })
    });
    finish("created post", post, issues)
}

/// Checks a post about to be submitted: title and body must not be blank.
pub fn validate_new_post(post: &NewPost) -> Result<(), ValidationError> {
    let issues: Vec<FieldIssue> = [("title", &post.title), ("body", &post.body)]
        .into_iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(field, _)| FieldIssue::new(field, IssueKind::Empty))
        .collect();
    finish("new post", Some(()), issues)
}

fn finish<T>(
    entity: &'static str,
    value: Option<T>,
    issues: Vec<FieldIssue>,
) -> Result<T, ValidationError> {
    match value {
        Some(value) if issues.is_empty() => Ok(value),
        _ => Err(ValidationError::new(entity, issues)),
    }
}

fn path_of(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else if field.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

fn root_path(prefix: &str) -> String {
    if prefix.is_empty() {
        "$".to_string()
    } else {
        prefix.to_string()
    }
}

fn check_object<'a>(
    value: &'a Value,
    prefix: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(fields) => Some(fields),
        Value::Null => {
            issues.push(FieldIssue::new(root_path(prefix), IssueKind::Missing));
            None
        }
        _ => {
            issues.push(FieldIssue::new(
                root_path(prefix),
                IssueKind::WrongType { expected: "object" },
            ));
            None
        }
    }
}

fn check_array<T>(
    value: &Value,
    issues: &mut Vec<FieldIssue>,
    check: fn(&Value, &str, &mut Vec<FieldIssue>) -> Option<T>,
) -> Option<Vec<T>> {
    let Value::Array(items) = value else {
        issues.push(FieldIssue::new("$", IssueKind::WrongType { expected: "array" }));
        return None;
    };

    let mut checked = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if let Some(item) = check(item, &format!("[{index}]"), issues) {
            checked.push(item);
        }
    }

    (checked.len() == items.len()).then_some(checked)
}

/// Looks up a present, non-null field or records it as missing.
fn present<'a>(
    fields: &'a Map<String, Value>,
    prefix: &str,
    name: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<&'a Value> {
    match fields.get(name) {
        Some(Value::Null) | None => {
            issues.push(FieldIssue::new(path_of(prefix, name), IssueKind::Missing));
            None
        }
        Some(value) => Some(value),
    }
}

fn as_id(value: &Value, path: String, issues: &mut Vec<FieldIssue>) -> Option<u64> {
    match value.as_u64() {
        Some(id) => Some(id),
        None => {
            issues.push(FieldIssue::new(
                path,
                IssueKind::WrongType {
                    expected: "non-negative integer",
                },
            ));
            None
        }
    }
}

fn as_string(value: &Value, path: String, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        _ => {
            issues.push(FieldIssue::new(path, IssueKind::WrongType { expected: "string" }));
            None
        }
    }
}

fn require_id(
    fields: &Map<String, Value>,
    prefix: &str,
    name: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<u64> {
    let value = present(fields, prefix, name, issues)?;
    as_id(value, path_of(prefix, name), issues)
}

fn require_string(
    fields: &Map<String, Value>,
    prefix: &str,
    name: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    let value = present(fields, prefix, name, issues)?;
    as_string(value, path_of(prefix, name), issues)
}

/// Returns `Some(None)` when the field is absent or null, `None` when it is
/// present with the wrong type.
fn optional_string(
    fields: &Map<String, Value>,
    prefix: &str,
    name: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Option<String>> {
    match fields.get(name) {
        Some(Value::Null) | None => Some(None),
        Some(value) => as_string(value, path_of(prefix, name), issues).map(Some),
    }
}

fn optional_id(
    fields: &Map<String, Value>,
    prefix: &str,
    name: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Option<u64>> {
    match fields.get(name) {
        Some(Value::Null) | None => Some(None),
        Some(value) => as_id(value, path_of(prefix, name), issues).map(Some),
    }
}

fn check_author(value: &Value, prefix: &str, issues: &mut Vec<FieldIssue>) -> Option<Author> {
    let fields = check_object(value, prefix, issues)?;

    let id = require_id(fields, prefix, "id", issues);
    let name = require_string(fields, prefix, "name", issues);
    let email = require_string(fields, prefix, "email", issues).and_then(|email| {
        if EmailAddress::is_valid(&email) {
            Some(email)
        } else {
            issues.push(FieldIssue::new(
                path_of(prefix, "email"),
                IssueKind::InvalidEmail,
            ));
            None
        }
    });

    Some(Author {
        id: id?,
        name: name?,
        email: email?,
    })
}

fn check_raw_post(value: &Value, prefix: &str, issues: &mut Vec<FieldIssue>) -> Option<RawPost> {
    let fields = check_object(value, prefix, issues)?;

    let id = require_id(fields, prefix, "id", issues);
    let user_id = require_id(fields, prefix, "userId", issues);
    let title = require_string(fields, prefix, "title", issues);
    let description = optional_string(fields, prefix, "description", issues);
    let body = require_string(fields, prefix, "body", issues);

    Some(RawPost {
        id: id?,
        user_id: user_id?,
        title: title?,
        description: description?,
        body: body?,
    })
}

fn check_post(value: &Value, prefix: &str, issues: &mut Vec<FieldIssue>) -> Option<Post> {
    let raw = check_raw_post(value, prefix, issues);

    let author_path = path_of(prefix, "author");
    let author = match value.get("author") {
        Some(Value::Null) | None => {
            // Only report when the post itself was an object; otherwise the
            // root issue already covers it.
            if value.is_object() {
                issues.push(FieldIssue::new(author_path.clone(), IssueKind::Missing));
            }
            None
        }
        Some(author) => check_author(author, &author_path, issues),
    };

    let (raw, author) = (raw?, author?);
    if author.id != raw.user_id {
        issues.push(FieldIssue::new(
            path_of(&author_path, "id"),
            IssueKind::AuthorMismatch {
                user_id: raw.user_id,
                author_id: author.id,
            },
        ));
        return None;
    }

    Some(raw.with_author(author))
}

fn check_author_post(
    value: &Value,
    prefix: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<AuthorPost> {
    let fields = check_object(value, prefix, issues)?;

    let user_id = require_id(fields, prefix, "userId", issues);
    let id = require_id(fields, prefix, "id", issues);
    let title = require_string(fields, prefix, "title", issues);
    let body = require_string(fields, prefix, "body", issues);

    Some(AuthorPost {
        user_id: user_id?,
        id: id?,
        title: title?,
        body: body?,
    })
}
