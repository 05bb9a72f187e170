//! CLI error types.

use mdpress_config::ConfigError;
use mdpress_wordpress::PublishError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Publish(#[from] PublishError),
}
