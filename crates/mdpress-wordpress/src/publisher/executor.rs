//! Post publisher implementation.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use mdpress_document::Document;
use mdpress_renderer::HtmlRenderer;

use crate::client::WordPressClient;
use crate::taxonomy::Taxonomy;
use crate::types::NewPost;

use super::PublishConfig;
use super::error::PublishError;
use super::result::{DryRunResult, PublishResult};

/// Handles publishing markdown documents as WordPress posts.
pub struct PostPublisher<'a> {
    client: &'a WordPressClient,
    config: PublishConfig,
}

impl<'a> PostPublisher<'a> {
    /// Create a new post publisher.
    #[must_use]
    pub fn new(client: &'a WordPressClient, config: PublishConfig) -> Self {
        Self { client, config }
    }

    /// Publish a markdown document as a post.
    ///
    /// Authentication runs first: a rejected login aborts the run before any
    /// taxonomy or post request is attempted. The post is created with
    /// status "publish".
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or any WordPress API
    /// call fails.
    pub fn publish(&self, markdown_file: &Path) -> Result<PublishResult, PublishError> {
        let token = self
            .client
            .authenticate(&self.config.username, &self.config.password)?;

        let category_map = self.client.fetch_terms(Taxonomy::Categories)?;
        let tag_map = self.client.fetch_terms(Taxonomy::Tags)?;

        let document = Document::from_path(markdown_file)?;
        let content = HtmlRenderer::new().render(&document.body);

        let categories = resolve_terms(&document.categories, &category_map, Taxonomy::Categories);
        let tags = resolve_terms(&document.tags, &tag_map, Taxonomy::Tags);

        let post = NewPost {
            title: document.title.clone(),
            status: "publish",
            content,
            categories: categories.ids.clone(),
            excerpt: document.excerpt,
            tags: tags.ids.clone(),
        };

        let created = self.client.create_post(&token, &post)?;

        Ok(PublishResult {
            post: created,
            title: document.title,
            category_ids: categories.ids,
            tag_ids: tags.ids,
            unmatched_categories: categories.unmatched,
            unmatched_tags: tags.unmatched,
        })
    }

    /// Preview the post payload without authenticating or creating anything.
    ///
    /// Taxonomy listings are unauthenticated reads, so the preview can show
    /// resolved and unmatched names.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or a taxonomy
    /// listing fails.
    pub fn dry_run(&self, markdown_file: &Path) -> Result<DryRunResult, PublishError> {
        let category_map = self.client.fetch_terms(Taxonomy::Categories)?;
        let tag_map = self.client.fetch_terms(Taxonomy::Tags)?;

        let document = Document::from_path(markdown_file)?;
        let html = HtmlRenderer::new().render(&document.body);

        let categories = resolve_terms(&document.categories, &category_map, Taxonomy::Categories);
        let tags = resolve_terms(&document.tags, &tag_map, Taxonomy::Tags);

        Ok(DryRunResult {
            title: document.title,
            html,
            excerpt: document.excerpt,
            category_ids: categories.ids,
            tag_ids: tags.ids,
            unmatched_categories: categories.unmatched,
            unmatched_tags: tags.unmatched,
        })
    }
}

/// Outcome of resolving taxonomy names against the remote map.
struct ResolvedTerms {
    ids: Vec<u64>,
    unmatched: Vec<String>,
}

/// Resolve taxonomy names to remote identifiers.
///
/// Names are entity-escaped (`&` → `&amp;`) before lookup so they match
/// remote names stored in escaped form. Names with no match are dropped,
/// never created.
fn resolve_terms(
    names: &[String],
    map: &HashMap<String, u64>,
    taxonomy: Taxonomy,
) -> ResolvedTerms {
    let mut ids = Vec::new();
    let mut unmatched = Vec::new();
    for name in names {
        let normalized = name.replace('&', "&amp;");
        match map.get(&normalized) {
            Some(id) => ids.push(*id),
            None => {
                warn!(
                    "No existing {} named \"{}\", dropping it",
                    taxonomy.singular(),
                    name
                );
                unmatched.push(name.clone());
            }
        }
    }
    ResolvedTerms { ids, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn matched_names_resolve_in_order() {
        let map = HashMap::from([("news".to_owned(), 1), ("releases".to_owned(), 5)]);
        let resolved = resolve_terms(&names(&["releases", "news"]), &map, Taxonomy::Categories);
        assert_eq!(resolved.ids, vec![5, 1]);
        assert!(resolved.unmatched.is_empty());
    }

    #[test]
    fn unmatched_names_are_dropped_not_errors() {
        let map = HashMap::from([("go".to_owned(), 2)]);
        let resolved = resolve_terms(&names(&["go", "rust"]), &map, Taxonomy::Tags);
        assert_eq!(resolved.ids, vec![2]);
        assert_eq!(resolved.unmatched, vec!["rust"]);
    }

    #[test]
    fn empty_map_drops_everything() {
        let map = HashMap::new();
        let resolved = resolve_terms(&names(&["anything"]), &map, Taxonomy::Tags);
        assert!(resolved.ids.is_empty());
        assert_eq!(resolved.unmatched, vec!["anything"]);
    }

    #[test]
    fn ampersand_is_escaped_before_lookup() {
        let map = HashMap::from([("tips &amp; tricks".to_owned(), 9)]);
        let resolved = resolve_terms(&names(&["tips & tricks"]), &map, Taxonomy::Categories);
        assert_eq!(resolved.ids, vec![9]);
        assert!(resolved.unmatched.is_empty());
    }

    #[test]
    fn scenario_document_builds_expected_payload() {
        let document = Document::parse(
            "# Hello\nCategories: news\nTags: go, rust\nBody text\n## Excerpt\nShort.\n",
        );
        let category_map = HashMap::from([("news".to_owned(), 1)]);
        let tag_map = HashMap::from([("go".to_owned(), 2)]);

        let content = HtmlRenderer::new().render(&document.body);
        let categories = resolve_terms(&document.categories, &category_map, Taxonomy::Categories);
        let tags = resolve_terms(&document.tags, &tag_map, Taxonomy::Tags);

        let post = NewPost {
            title: document.title,
            status: "publish",
            content,
            categories: categories.ids,
            excerpt: document.excerpt,
            tags: tags.ids,
        };

        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "title": "Hello",
                "status": "publish",
                "content": "<p>Body text</p>",
                "categories": [1],
                "excerpt": "Short.\n",
                "tags": [2]
            })
        );
        assert_eq!(tags.unmatched, vec!["rust"]);
    }
}
