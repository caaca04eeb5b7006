//! Author API operations.

use tinyblog_core::blog::{validate_author, Author};

use super::BlogClient;
use crate::error::{ClientError, Result};

impl BlogClient {
    /// Resolve an author by user ID.
    ///
    /// Any non-success status is reported as [`ClientError::NotFound`]; a
    /// payload that fails validation as [`ClientError::Validation`]. Single
    /// attempt, no retries.
    pub async fn resolve_author(&self, user_id: u64) -> Result<Author> {
        let value = match self.get_json(&format!("/users/{user_id}"), &[]).await {
            Ok(value) => value,
            Err(ClientError::NotFound { .. }) => return Err(author_not_found(user_id)),
            Err(ClientError::Upstream { status, .. }) => {
                tracing::debug!(user_id, status, "author lookup failed");
                return Err(author_not_found(user_id));
            }
            Err(e) => return Err(e),
        };
        Ok(validate_author(&value)?)
    }
}

fn author_not_found(user_id: u64) -> ClientError {
    ClientError::NotFound {
        resource: format!("author {user_id}"),
    }
}
