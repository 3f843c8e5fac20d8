//! HTTP client for public GitHub profile pages.

use std::time::Duration;

use ghdash_core::AppConfig;
use reqwest::Client;

use crate::error::ScraperError;
use crate::parse::{parse_profile, parse_profile_details};
use crate::types::{Profile, ProfileDetails};

/// Origin the real profile pages live on.
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// Connect timeout applied alongside an opted-in request timeout.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for public profile pages.
///
/// Deliberately plain by default: one GET per profile, the HTTP library's
/// default headers, no timeout, and the body is parsed whatever the status
/// code. GitHub serves fully rendered markup on 404 pages too, and a body
/// with no recognizable markup simply extracts to the documented fallbacks.
/// Request timeout, custom `User-Agent`, and strict status handling are
/// available as opt-in configuration via [`ProfileClient::from_config`].
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: Client,
    base_url: String,
    strict_status: bool,
}

impl ProfileClient {
    /// Creates a client with default behavior against the real site.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new() -> Result<Self, ScraperError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with default behavior against another origin.
    ///
    /// Tests point this at a local mock server. A trailing slash on
    /// `base_url` is stripped so URL assembly never doubles the separator.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(base_url: &str) -> Result<Self, ScraperError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            strict_status: false,
        })
    }

    /// Creates a client honoring the opt-in hardening options in `config`.
    ///
    /// With none of the scraper options set this is equivalent to
    /// [`ProfileClient::with_base_url`] on `config.profile_base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let mut builder = Client::builder();

        if let Some(secs) = config.scraper_request_timeout_secs {
            builder = builder
                .timeout(Duration::from_secs(secs))
                .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));
        }

        if let Some(user_agent) = &config.scraper_user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: config.profile_base_url.trim_end_matches('/').to_owned(),
            strict_status: config.scraper_strict_status,
        })
    }

    /// Fetches `{base}/{username}` and extracts the three-field [`Profile`].
    ///
    /// Exactly one round trip. The username is interpolated into the URL
    /// verbatim, with no validation or percent-encoding of our own; unusual
    /// input gets whatever treatment the HTTP library's URL handling applies.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`]: DNS, connect, or transport failure, or a
    ///   username the URL parser rejects outright.
    /// - [`ScraperError::UnexpectedStatus`]: non-2xx response, only when
    ///   strict status handling was opted into.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, ScraperError> {
        let body = self.fetch_page(username).await?;
        Ok(parse_profile(&body))
    }

    /// Fetches the same page and extracts the supplemental
    /// [`ProfileDetails`] view (pinned cards, repository count).
    ///
    /// # Errors
    ///
    /// Same as [`ProfileClient::fetch_profile`].
    pub async fn fetch_profile_details(
        &self,
        username: &str,
    ) -> Result<ProfileDetails, ScraperError> {
        let body = self.fetch_page(username).await?;
        Ok(parse_profile_details(&body, &self.base_url))
    }

    /// One GET, returning the body text regardless of status unless strict
    /// status handling is enabled.
    async fn fetch_page(&self, username: &str) -> Result<String, ScraperError> {
        let url = self.profile_url(username);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            if self.strict_status {
                return Err(ScraperError::UnexpectedStatus {
                    status: status.as_u16(),
                    url,
                });
            }
            tracing::warn!(
                status = status.as_u16(),
                url = %url,
                "non-success status from profile page, parsing body anyway"
            );
        }

        Ok(response.text().await?)
    }

    /// Builds the profile page URL by plain interpolation.
    fn profile_url(&self, username: &str) -> String {
        format!("{}/{username}", self.base_url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
