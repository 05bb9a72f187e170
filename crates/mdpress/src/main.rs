//! mdpress CLI - publish markdown documents to WordPress.
//!
//! Reads connection settings from the `WP_URL`, `WP_USER` and `WP_PASS`
//! environment variables, then publishes the given markdown file as a post.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::PublishArgs;
use output::Output;

/// mdpress - publish markdown documents to WordPress.
#[derive(Parser)]
#[command(name = "mdpress", version, about)]
struct Cli {
    #[command(flatten)]
    publish: PublishArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.publish.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = cli.publish.execute(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
