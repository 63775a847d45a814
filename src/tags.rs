//! GitHub tag listing and pre-release candidate selection

use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::UpdateConfig;
use crate::error::{Error, Result};

/// Case-sensitive substrings marking a tag as a pre-release build
pub const PRERELEASE_MARKERS: &[&str] = &["alpha", "beta", "dev"];

/// One entry of the repository tag listing
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    /// Tag name, used verbatim as the candidate version (e.g. "2.1-beta")
    pub name: String,

    /// Source snapshot archive URL
    pub zipball_url: String,

    /// Publish timestamp; the tags endpoint does not send one, carried for
    /// hosts that merge release metadata in
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Client for the repository tag listing
pub struct TagFetcher {
    /// HTTP client with the configured user agent and timeout
    client: reqwest::Client,

    /// Watched repository settings
    config: UpdateConfig,
}

impl TagFetcher {
    /// Create a fetcher for the configured repository
    pub fn new(config: UpdateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(Duration::from_secs(config.network.http_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Tag listing endpoint for the watched repository, without the token
    pub fn tags_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/tags",
            self.config.api_url.trim_end_matches('/'),
            self.config.repo_owner,
            self.config.repo_name
        )
    }

    /// Fetch the tag listing in remote order
    ///
    /// The body is read as text first so an empty response and malformed
    /// JSON fail distinctly; both map to "no candidate" at the caller.
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let url = self.tags_url();
        debug!("Fetching tag listing from: {}", url);

        let request_url = append_access_token(&url, self.config.access_token.as_deref());
        let response = self.client.get(&request_url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(Error::EmptyBody);
        }

        let tags: Vec<Tag> = serde_json::from_str(&body)?;
        debug!("Tag listing returned {} tags", tags.len());
        Ok(tags)
    }

    /// Fetch the tag listing and select the pre-release candidate
    pub async fn latest_prerelease(&self) -> Result<Option<Tag>> {
        let tags = self.list_tags().await?;
        Ok(select_prerelease(&tags).cloned())
    }
}

/// Select the first tag in remote order carrying a pre-release marker
///
/// The scan is bounded by the listing length; a listing without any marked
/// tag yields `None`.
pub fn select_prerelease(tags: &[Tag]) -> Option<&Tag> {
    tags.iter()
        .find(|tag| PRERELEASE_MARKERS.iter().any(|marker| tag.name.contains(marker)))
}

/// Append the access token to a URL as a query parameter
///
/// Matches the legacy host convention of token-in-query; an empty token is
/// treated as absent.
pub(crate) fn append_access_token(url: &str, token: Option<&str>) -> String {
    match token {
        Some(token) if !token.is_empty() => {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{}{}access_token={}", url, separator, token)
        }
        _ => url.to_string(),
    }
}
