//! WordPress REST API client.
//!
//! Sync HTTP client for the WordPress REST API with JWT bearer-token
//! authentication (the `jwt-auth` plugin endpoints).

mod auth;
mod posts;
mod terms;

use ureq::Agent;

/// WordPress REST API client.
pub struct WordPressClient {
    agent: Agent,
    base_url: String,
}

impl WordPressClient {
    /// Create a client for the given WordPress base URL.
    ///
    /// The agent sets no global timeout: requests run to completion or fail
    /// outright, with no cancellation and no retries.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/wp-json", self.base_url)
    }
}
