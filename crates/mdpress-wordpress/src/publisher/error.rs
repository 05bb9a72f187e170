//! Publish error type.

use mdpress_document::DocumentError;

use crate::error::WordPressError;

/// Error during post publishing.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Document could not be read.
    #[error("{0}")]
    Document(#[from] DocumentError),

    /// WordPress API call failed.
    #[error("{0}")]
    WordPress(#[from] WordPressError),
}
