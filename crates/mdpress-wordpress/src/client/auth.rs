//! JWT authentication endpoint.

use serde_json::json;
use tracing::info;

use super::WordPressClient;
use crate::error::WordPressError;

impl WordPressClient {
    /// Exchange credentials for a JWT bearer token.
    ///
    /// Fetched once per run, used once, not persisted.
    pub(crate) fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, WordPressError> {
        let url = format!("{}/jwt-auth/v1/token", self.api_url());

        info!("Requesting JWT token for {}", username);

        let payload = serde_json::to_vec(&json!({
            "username": username,
            "password": password,
        }))?;

        let response = self
            .agent
            .post(&url)
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

        let body: serde_json::Value = body_reader.read_json()?;
        body.get("token")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .ok_or(WordPressError::MissingField("token"))
    }
}
