//! Builder patterns for test data construction
//!
//! Provides a fluent API for constructing tag listing entries shaped like
//! the GitHub tags endpoint, including the fields betafeed ignores.

use serde_json::{json, Value};

use super::constants::*;

/// Zipball URL the tag listing advertises for a tag name
pub fn zipball_url(name: &str) -> String {
    format!(
        "https://api.github.com/repos/{}/{}/zipball/{}",
        REPO_OWNER, REPO_NAME, name
    )
}

/// Builder for one tag listing entry with sensible test defaults
#[derive(Debug, Clone)]
pub struct TagBuilder {
    name: String,
    zipball_url: String,
}

impl TagBuilder {
    /// Create a builder for the given tag name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            zipball_url: zipball_url(name),
        }
    }

    /// Override the zipball URL
    pub fn zipball(mut self, url: &str) -> Self {
        self.zipball_url = url.to_string();
        self
    }

    /// Build the JSON entry as the tags endpoint would send it
    pub fn build(self) -> Value {
        let tarball_url = self.zipball_url.replace("/zipball/", "/tarball/");
        json!({
            "name": self.name,
            "zipball_url": self.zipball_url,
            "tarball_url": tarball_url,
            "commit": {
                "sha": "c0ffee0000000000000000000000000000000000",
                "url": format!(
                    "https://api.github.com/repos/{}/{}/commits/c0ffee",
                    REPO_OWNER, REPO_NAME
                )
            },
            "node_id": "MDM6UmVmMTIzNDU2Nzg5"
        })
    }
}

/// One tag listing entry with defaults for the given name
pub fn tag(name: &str) -> Value {
    TagBuilder::new(name).build()
}

/// A full tag listing body in the given remote order
pub fn tags_body(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|name| tag(name)).collect())
}
