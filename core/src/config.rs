//! Configuration for the Unsplash API client
//!
//! Defaults point at the public API. Everything can be overridden from the
//! environment or with builder methods.

use std::env;

use serde::{Deserialize, Serialize};

use crate::decoder::Decoder;
use crate::error::{ApiError, ApiResult};

pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_OAUTH_URL: &str = "https://unsplash.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base location of every API endpoint
    pub api_url: String,
    /// Base location of `/oauth/authorize` and `/oauth/token`
    pub oauth_url: String,
    /// Application access key, sent as `Client-ID` on public requests
    pub access_key: Option<String>,
    /// Application secret, needed only for the token exchange
    pub secret_key: Option<String>,
    /// Redirect URI registered with the application
    pub redirect_uri: Option<String>,
    /// Reject statistics whose series length disagrees with its quantity
    pub strict_statistics: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            oauth_url: DEFAULT_OAUTH_URL.to_string(),
            access_key: None,
            secret_key: None,
            redirect_uri: None,
            strict_statistics: false,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `UNSPLASH_API_URL`: API base location
    /// - `UNSPLASH_OAUTH_URL`: OAuth base location
    /// - `UNSPLASH_ACCESS_KEY`: application access key
    /// - `UNSPLASH_SECRET_KEY`: application secret key
    /// - `UNSPLASH_REDIRECT_URI`: OAuth redirect URI
    /// - `UNSPLASH_STRICT_STATISTICS`: `1`/`true` enables series validation
    pub fn from_env() -> ApiResult<Self> {
        let defaults = Self::default();
        let config = Self {
            api_url: env::var("UNSPLASH_API_URL").unwrap_or(defaults.api_url),
            oauth_url: env::var("UNSPLASH_OAUTH_URL").unwrap_or(defaults.oauth_url),
            access_key: env::var("UNSPLASH_ACCESS_KEY").ok(),
            secret_key: env::var("UNSPLASH_SECRET_KEY").ok(),
            redirect_uri: env::var("UNSPLASH_REDIRECT_URI").ok(),
            strict_statistics: env::var("UNSPLASH_STRICT_STATISTICS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    #[must_use]
    pub fn with_oauth_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_url = url.into();
        self
    }

    #[must_use]
    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_strict_statistics(mut self, strict: bool) -> Self {
        self.strict_statistics = strict;
        self
    }

    /// The decoder this configuration asks for.
    pub fn decoder(&self) -> Decoder {
        Decoder::new().with_time_series_validation(self.strict_statistics)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        for (name, url) in [("api_url", &self.api_url), ("oauth_url", &self.oauth_url)] {
            if url.is_empty() {
                return Err(ApiError::config(format!("{name} cannot be empty")));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ApiError::config(format!("{name} must start with http:// or https://")));
            }
        }

        if self.access_key.as_deref() == Some("") {
            return Err(ApiError::config("access_key cannot be empty"));
        }

        Ok(())
    }

    /// The credentials the token exchange needs, or a configuration error
    /// naming the first one missing.
    pub(crate) fn oauth_credentials(&self) -> ApiResult<(&str, &str, &str)> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or_else(|| ApiError::config("access_key is required for OAuth"))?;
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or_else(|| ApiError::config("secret_key is required for OAuth"))?;
        let redirect_uri = self
            .redirect_uri
            .as_deref()
            .ok_or_else(|| ApiError::config("redirect_uri is required for OAuth"))?;
        Ok((access_key, secret_key, redirect_uri))
    }
}
