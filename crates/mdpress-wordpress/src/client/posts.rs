//! Post creation endpoint.

use tracing::info;

use super::WordPressClient;
use crate::error::WordPressError;
use crate::types::{CreatedPost, NewPost};

impl WordPressClient {
    /// Create a post with the given bearer token.
    pub(crate) fn create_post(
        &self,
        token: &str,
        post: &NewPost,
    ) -> Result<CreatedPost, WordPressError> {
        let url = format!("{}/wp/v2/posts", self.api_url());

        info!("Creating post \"{}\"", post.title);

        let payload = serde_json::to_vec(post)?;

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

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

        let created: CreatedPost = body_reader.read_json()?;
        info!("Created post {} at {}", created.id, created.link);
        Ok(created)
    }
}
