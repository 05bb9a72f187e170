//! WordPress REST API integration for mdpress.
//!
//! This crate provides the full publishing pipeline:
//! - [`WordPressClient`]: REST API client (JWT authentication, taxonomy
//!   listing, post creation)
//! - [`PostPublisher`](publisher::PostPublisher): end-to-end publish workflow
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
//! let result = publisher.publish(Path::new("post.md"))?;
//! println!("{}", result.post.link);
//! # Ok(())
//! # }
//! ```

// API client
mod client;
pub use client::WordPressClient;

// Taxonomy kinds
mod taxonomy;
pub use taxonomy::Taxonomy;

// Wire types
mod types;
pub use types::{CreatedPost, NewPost, Term};

// Post publisher
pub mod publisher;
pub use publisher::{DryRunResult, PostPublisher, PublishConfig, PublishError, PublishResult};

// Errors
pub mod error;
pub use error::WordPressError;
