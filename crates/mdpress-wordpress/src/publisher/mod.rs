//! Post publisher for WordPress.
//!
//! This module provides the [`PostPublisher`] struct that encapsulates the
//! entire workflow for publishing a markdown document as a WordPress post:
//!
//! 1. Authenticate and obtain a JWT bearer token
//! 2. Fetch existing category and tag name→id maps
//! 3. Parse the document and render its body to HTML
//! 4. Resolve category/tag names against the remote maps
//! 5. Create the post with status "publish"
//!
//! Any step's failure terminates the run immediately; there are no retries
//! and no partial-success state.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use mdpress_wordpress::{PostPublisher, PublishConfig, WordPressClient};
//!
//! let client = WordPressClient::new("https://blog.example.com");
//! let config = PublishConfig {
//!     username: "admin".to_owned(),
//!     password: "secret".to_owned(),
//! };
//! let publisher = PostPublisher::new(&client, config);
//!
//! // Publish
//! let result = publisher.publish(Path::new("post.md"))?;
//!
//! // Or dry-run to preview the payload
//! let dry_run = publisher.dry_run(Path::new("post.md"))?;
//! # Ok(())
//! # }
//! ```

mod error;
mod executor;
mod result;

pub use error::PublishError;
pub use executor::PostPublisher;
pub use result::{DryRunResult, PublishResult};

/// Configuration for publishing a post.
pub struct PublishConfig {
    /// WordPress username.
    pub username: String,
    /// WordPress password.
    pub password: String,
}
