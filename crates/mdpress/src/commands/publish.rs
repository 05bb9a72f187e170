//! The publish command implementation.

use std::path::PathBuf;

use clap::Args;
use mdpress_config::Config;
use mdpress_wordpress::{
    DryRunResult, PostPublisher, PublishConfig, PublishResult, WordPressClient,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to the markdown file to publish.
    markdown_file: PathBuf,

    /// Preview the post payload without creating anything.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing or the publish fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::from_env()?;

        let client = WordPressClient::new(&config.base_url);
        let publisher = PostPublisher::new(
            &client,
            PublishConfig {
                username: config.username,
                password: config.password,
            },
        );

        output.info(&format!("Publishing {}...", self.markdown_file.display()));

        if self.dry_run {
            let result = publisher.dry_run(&self.markdown_file)?;
            print_dry_run_result(output, &result);
        } else {
            let result = publisher.publish(&self.markdown_file)?;
            print_publish_result(output, &result);
        }

        Ok(())
    }
}

fn print_publish_result(output: &Output, result: &PublishResult) {
    output.success("\nPost published successfully!");
    output.info(&format!("Title: {}", result.title));
    output.post_url(&result.post.link);
    output.info(&format!(
        "Categories: {} resolved, tags: {} resolved",
        result.category_ids.len(),
        result.tag_ids.len()
    ));
    print_unmatched(output, result.unmatched_categories.as_slice(), "categories");
    print_unmatched(output, result.unmatched_tags.as_slice(), "tags");
}

fn print_dry_run_result(output: &Output, result: &DryRunResult) {
    output.highlight("\n[DRY RUN] No post created.");

    output.info(&format!("Title: {}", result.title));
    output.info(&format!(
        "Categories: {:?}, tags: {:?}",
        result.category_ids, result.tag_ids
    ));
    if result.excerpt.is_empty() {
        output.info("Excerpt: (none)");
    } else {
        output.info(&format!("Excerpt: {}", result.excerpt.trim_end()));
    }
    output.info(&format!("\nRendered HTML:\n{}", result.html));

    print_unmatched(output, result.unmatched_categories.as_slice(), "categories");
    print_unmatched(output, result.unmatched_tags.as_slice(), "tags");
}

fn print_unmatched(output: &Output, unmatched: &[String], kind: &str) {
    if unmatched.is_empty() {
        return;
    }
    output.warning(&format!(
        "\nUnmatched {kind} dropped from the post ({}):",
        unmatched.len()
    ));
    for name in unmatched {
        output.info(&format!(r#"  - "{name}""#));
    }
}
