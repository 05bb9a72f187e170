//! Publish result types.

use crate::types::CreatedPost;

/// Result of a successful publish.
#[derive(Debug)]
pub struct PublishResult {
    /// The created post as reported by WordPress.
    pub post: CreatedPost,
    /// Post title.
    pub title: String,
    /// Resolved category identifiers.
    pub category_ids: Vec<u64>,
    /// Resolved tag identifiers.
    pub tag_ids: Vec<u64>,
    /// Category names with no matching remote term (dropped from the post).
    pub unmatched_categories: Vec<String>,
    /// Tag names with no matching remote term (dropped from the post).
    pub unmatched_tags: Vec<String>,
}

/// Result of a dry run (no post created).
#[derive(Debug)]
pub struct DryRunResult {
    /// Post title.
    pub title: String,
    /// Rendered HTML body.
    pub html: String,
    /// Excerpt text.
    pub excerpt: String,
    /// Resolved category identifiers.
    pub category_ids: Vec<u64>,
    /// Resolved tag identifiers.
    pub tag_ids: Vec<u64>,
    /// Category names with no matching remote term.
    pub unmatched_categories: Vec<String>,
    /// Tag names with no matching remote term.
    pub unmatched_tags: Vec<String>,
}
