//! Taxonomy term listing endpoints.

use std::collections::HashMap;

use tracing::info;

use super::WordPressClient;
use crate::error::WordPressError;
use crate::taxonomy::Taxonomy;
use crate::types::Term;

/// Maximum number of terms requested per taxonomy.
///
/// Only the first page is fetched; sites with more than 100 terms of one
/// kind will not resolve the overflow.
const PER_PAGE: u32 = 100;

impl WordPressClient {
    /// Fetch the current term list for a taxonomy.
    ///
    /// Returns a map from each term's lowercased display name to its remote
    /// numeric identifier. The request is unauthenticated.
    pub(crate) fn fetch_terms(
        &self,
        taxonomy: Taxonomy,
    ) -> Result<HashMap<String, u64>, WordPressError> {
        let url = format!(
            "{}/wp/v2/{}?per_page={PER_PAGE}",
            self.api_url(),
            taxonomy.endpoint()
        );

        info!("Fetching {}", taxonomy.endpoint());

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(WordPressError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let terms: Vec<Term> = body_reader.read_json()?;
        Ok(terms
            .into_iter()
            .map(|term| (term.name.to_lowercase(), term.id))
            .collect())
    }
}
