//! Update checker configuration
//!
//! Everything the checker needs is passed explicitly at construction; there
//! is no process-wide configuration singleton. Hosts that keep their settings
//! in a file can deserialize `UpdateConfig` directly (kebab-case keys).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one watched plugin and its upstream repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateConfig {
    /// Repository owner
    pub repo_owner: String,

    /// Repository name
    pub repo_name: String,

    /// Access token for private repositories, sent as a query parameter
    #[serde(default)]
    pub access_token: Option<String>,

    /// Base URL for the GitHub API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path to the installed plugin's descriptor file
    pub plugin_file: PathBuf,

    /// Root directory the host installs plugins under
    pub plugins_dir: PathBuf,

    /// Changelog text shown in the host's plugin info view; when unset, a
    /// default pointing at the repository's tag listing page is used
    #[serde(default)]
    pub changelog_note: Option<String>,

    /// Network settings
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_http_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!(
        "betafeed/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

impl UpdateConfig {
    /// Create a configuration with default network settings
    pub fn new(
        repo_owner: impl Into<String>,
        repo_name: impl Into<String>,
        plugin_file: impl Into<PathBuf>,
        plugins_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_owner: repo_owner.into(),
            repo_name: repo_name.into(),
            access_token: None,
            api_url: default_api_url(),
            plugin_file: plugin_file.into(),
            plugins_dir: plugins_dir.into(),
            changelog_note: None,
            network: NetworkConfig::default(),
        }
    }

    /// Set an access token for private repositories
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the API base URL
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the changelog text shown in the plugin info view
    pub fn with_changelog_note(mut self, note: impl Into<String>) -> Self {
        self.changelog_note = Some(note.into());
        self
    }

    /// Public web page for the watched repository
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.repo_owner, self.repo_name)
    }

    /// Changelog text for the plugin info view
    pub fn changelog_text(&self) -> String {
        match &self.changelog_note {
            Some(note) => note.clone(),
            None => format!(
                "For the most recent changes see the tag listing at {}/tags.",
                self.repo_url()
            ),
        }
    }
}
