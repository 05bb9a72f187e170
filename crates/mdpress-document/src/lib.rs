//! Markdown document parsing for mdpress.
//!
//! Extracts post metadata from a lightly structured markdown document:
//!
//! ```markdown
//! # Post title
//! Categories: news, releases
//! Tags: rust, cli
//!
//! Body markdown...
//!
//! ## Excerpt
//! Short summary shown in listings.
//! ```
//!
//! Everything outside the metadata lines becomes the post body; lines after
//! the `## Excerpt` marker become the excerpt.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Title used when the document has no H1 heading.
const DEFAULT_TITLE: &str = "No title";

/// Marker line that switches accumulation from body to excerpt.
const EXCERPT_MARKER: &str = "## Excerpt";

/// First line matching an H1 heading anywhere in the document.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());

/// First `Categories:` metadata line.
static CATEGORIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Categories: (.+)$").unwrap());

/// First `Tags:` metadata line.
static TAGS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^Tags: (.+)$").unwrap());

/// H1 heading line at the very start of the document (removed from the body).
static LEADING_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^# .+\n").unwrap());

/// Parsed markdown document.
///
/// Parsed once per invocation from a file path; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Post title from the first H1 heading, or `"No title"`.
    pub title: String,
    /// Category names, trimmed and lowercased, order preserved.
    pub categories: Vec<String>,
    /// Tag names, trimmed and lowercased, order preserved.
    pub tags: Vec<String>,
    /// Body markdown with metadata lines removed.
    pub body: String,
    /// Excerpt text (empty if the document has no `## Excerpt` marker).
    pub excerpt: String,
}

impl Document {
    /// Read and parse a markdown document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parse a markdown document from raw text.
    ///
    /// Only the first occurrence of the title/categories/tags patterns is
    /// honored. The title heading line is removed from the body only when the
    /// document starts with one; a heading matched later in the document is
    /// used as the title but stays in the body.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let title = TITLE_RE
            .captures(text)
            .map_or_else(|| DEFAULT_TITLE.to_owned(), |c| c[1].to_owned());
        let categories = term_list(CATEGORIES_RE.captures(text));
        let tags = term_list(TAGS_RE.captures(text));

        let remainder = LEADING_TITLE_RE.replace(text, "");
        let remainder = remainder.trim();

        let mut body = String::new();
        let mut excerpt = String::new();
        let mut in_excerpt = false;
        for line in remainder.split('\n') {
            if line.starts_with("Categories: ") || line.starts_with("Tags: ") {
                continue;
            }
            if line.contains(EXCERPT_MARKER) {
                in_excerpt = true;
                continue;
            }
            let target = if in_excerpt { &mut excerpt } else { &mut body };
            target.push_str(line);
            target.push('\n');
        }

        Self {
            title,
            categories,
            tags,
            body,
            excerpt,
        }
    }
}

/// Split a metadata capture into trimmed, lowercased terms.
fn term_list(captures: Option<Captures<'_>>) -> Vec<String> {
    captures.map_or_else(Vec::new, |c| {
        c[1].split(',').map(|t| t.trim().to_lowercase()).collect()
    })
}

/// Document parsing error.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error reading the document file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn title_from_first_h1() {
        let doc = Document::parse("# Hello World\n\nBody.\n");
        assert_eq!(doc.title, "Hello World");
    }

    #[test]
    fn missing_title_uses_placeholder() {
        let doc = Document::parse("Just some text.\n");
        assert_eq!(doc.title, "No title");
    }

    #[test]
    fn only_first_title_is_used() {
        let doc = Document::parse("# First\n\n# Second\n");
        assert_eq!(doc.title, "First");
    }

    #[test]
    fn later_title_is_extracted_but_stays_in_body() {
        let doc = Document::parse("Intro.\n# Late Title\nMore.\n");
        assert_eq!(doc.title, "Late Title");
        assert_eq!(doc.body, "Intro.\n# Late Title\nMore.\n");
    }

    #[test]
    fn categories_trimmed_and_lowercased() {
        let doc = Document::parse("Categories: a, B , c\n");
        assert_eq!(doc.categories, vec!["a", "b", "c"]);
    }

    #[test]
    fn tags_trimmed_and_lowercased() {
        let doc = Document::parse("Tags: Rust , CLI\n");
        assert_eq!(doc.tags, vec!["rust", "cli"]);
    }

    #[test]
    fn missing_metadata_lines_give_empty_lists() {
        let doc = Document::parse("# Title\n\nBody.\n");
        assert!(doc.categories.is_empty());
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn metadata_lines_removed_from_body() {
        let doc = Document::parse("# T\nCategories: news\nTags: rust\nBody text\n");
        assert_eq!(doc.body, "Body text\n");
    }

    #[test]
    fn excerpt_marker_splits_body_and_excerpt() {
        let doc =
            Document::parse("# Hello\nCategories: news\nTags: go, rust\nBody text\n## Excerpt\nShort.\n");
        assert_eq!(doc.title, "Hello");
        assert_eq!(doc.categories, vec!["news"]);
        assert_eq!(doc.tags, vec!["go", "rust"]);
        assert_eq!(doc.body, "Body text\n");
        assert_eq!(doc.excerpt, "Short.\n");
    }

    #[test]
    fn no_excerpt_marker_leaves_excerpt_empty() {
        let doc = Document::parse("# T\n\nAll body.\n");
        assert_eq!(doc.body, "All body.\n");
        assert_eq!(doc.excerpt, "");
    }

    #[test]
    fn multiline_excerpt_accumulates() {
        let doc = Document::parse("# T\nBody.\n## Excerpt\nLine one.\nLine two.\n");
        assert_eq!(doc.excerpt, "Line one.\nLine two.\n");
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# From File\n\nContent.\n").unwrap();
        let doc = Document::from_path(file.path()).unwrap();
        assert_eq!(doc.title, "From File");
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let err = Document::from_path(Path::new("/nonexistent/post.md")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }
}
