//! Configuration management for mdpress.
//!
//! All configuration is sourced from the process environment at startup:
//!
//! - `WP_URL` - WordPress base URL (e.g., `https://blog.example.com`)
//! - `WP_USER` - WordPress username
//! - `WP_PASS` - WordPress password
//!
//! Missing or invalid values are fatal before any file or network activity.

/// Environment variable holding the WordPress base URL.
const VAR_URL: &str = "WP_URL";
/// Environment variable holding the WordPress username.
const VAR_USER: &str = "WP_USER";
/// Environment variable holding the WordPress password.
const VAR_PASS: &str = "WP_PASS";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// WordPress base URL.
    pub base_url: String,
    /// WordPress username.
    pub username: String,
    /// WordPress password.
    pub password: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if a required variable is unset and
    /// [`ConfigError::Validation`] if a value is empty or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = require_var(VAR_URL)?;
        let username = require_var(VAR_USER)?;
        let password = require_var(VAR_PASS)?;
        Self::new(base_url, username, password)
    }

    /// Build and validate a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any value is empty or the URL
    /// does not use an http(s) scheme.
    pub fn new(
        base_url: String,
        username: String,
        password: String,
    ) -> Result<Self, ConfigError> {
        require_non_empty(&base_url, VAR_URL)?;
        require_http_url(&base_url, VAR_URL)?;
        require_non_empty(&username, VAR_USER)?;
        require_non_empty(&password, VAR_PASS)?;
        Ok(Self {
            base_url,
            username,
            password,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable not set.
    #[error("Required environment variable {0} is not set")]
    Missing(&'static str),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Read a required environment variable.
fn require_var(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::Missing(var))
}

/// Require a value to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL value to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(url: &str, user: &str, pass: &str) -> Result<Config, ConfigError> {
        Config::new(url.to_owned(), user.to_owned(), pass.to_owned())
    }

    #[test]
    fn valid_config_accepted() {
        let config = config("https://blog.example.com", "admin", "secret").unwrap();
        assert_eq!(config.base_url, "https://blog.example.com");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn http_scheme_accepted() {
        assert!(config("http://localhost:8080", "admin", "secret").is_ok());
    }

    #[test]
    fn empty_url_rejected() {
        let err = config("", "admin", "secret").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("WP_URL"));
    }

    #[test]
    fn non_http_url_rejected() {
        let err = config("ftp://blog.example.com", "admin", "secret").unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn empty_username_rejected() {
        let err = config("https://blog.example.com", "", "secret").unwrap_err();
        assert!(err.to_string().contains("WP_USER"));
    }

    #[test]
    fn empty_password_rejected() {
        let err = config("https://blog.example.com", "admin", "").unwrap_err();
        assert!(err.to_string().contains("WP_PASS"));
    }

    #[test]
    fn missing_error_names_variable() {
        let err = ConfigError::Missing("WP_URL");
        assert_eq!(
            err.to_string(),
            "Required environment variable WP_URL is not set"
        );
    }
}
