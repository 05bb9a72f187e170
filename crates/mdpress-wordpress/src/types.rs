//! WordPress REST API wire types.
//!
//! Only the fields this pipeline uses are modeled; unknown fields in
//! responses are ignored.

use serde::{Deserialize, Serialize};

/// Taxonomy term as returned by the term-listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    /// Remote numeric identifier.
    pub id: u64,
    /// Display name (may be entity-escaped, e.g. `tips &amp; tricks`).
    pub name: String,
}

/// Outbound post-creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Publication status (always `"publish"`).
    pub status: &'static str,
    /// Rendered HTML body.
    pub content: String,
    /// Resolved category identifiers.
    pub categories: Vec<u64>,
    /// Excerpt text (may be empty).
    pub excerpt: String,
    /// Resolved tag identifiers.
    pub tags: Vec<u64>,
}

/// Created post as returned by the post-creation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPost {
    /// Remote numeric identifier.
    pub id: u64,
    /// Public URL of the published post.
    pub link: String,
}
