//! Pure blog logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - The post and author data model as it travels from the upstream API to pages
//! - Schema validation of raw JSON payloads into typed records
//! - Author enrichment (joining a resolved author onto raw posts)
//! - Route parameter parsing
//! - Text case and timestamp formatting helpers
//!
//! # Example
//!
//! ```
//! use tinyblog_core::blog::{enrich_posts, validate_author, validate_raw_posts};
//!
//! let posts = validate_raw_posts(&serde_json::json!([
//!     { "id": 1, "userId": 7, "title": "A", "body": "b" }
//! ])).unwrap();
//! let author = validate_author(&serde_json::json!({
//!     "id": 7, "name": "X", "email": "x@x.com"
//! })).unwrap();
//!
//! let merged = enrich_posts(posts, vec![author]).unwrap();
//! assert_eq!(merged[0].author.id, merged[0].user_id);
//! ```

pub mod blog;
pub mod format;
pub mod params;
