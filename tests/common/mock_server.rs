//! Mock server helpers for tag listing tests
//!
//! Provides utilities for setting up wiremock mock servers with common
//! response patterns for the GitHub tags endpoint.

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::constants::*;

/// Path of the tag listing endpoint for the test repository
pub fn tags_path() -> String {
    format!("/repos/{}/{}/tags", REPO_OWNER, REPO_NAME)
}

/// Set up a tag listing endpoint returning the given body
pub async fn mock_tag_listing(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(tags_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Set up a tag listing endpoint that must be hit exactly once
pub async fn mock_tag_listing_once(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(tags_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Set up a tag listing endpoint answering with the given status and no body
pub async fn mock_tag_listing_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(tags_path()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Set up a tag listing endpoint returning a raw string body
///
/// Used for empty and malformed response tests.
pub async fn mock_raw_tag_listing(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(tags_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Set up a tag listing that fails N times before succeeding
///
/// First `fail_count` requests return 500, subsequent requests return the body.
pub async fn mock_flaky_tag_listing(server: &MockServer, fail_count: u64, body: Value) {
    // First N requests fail
    Mock::given(method("GET"))
        .and(path(tags_path()))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(fail_count)
        .mount(server)
        .await;

    // Subsequent requests succeed
    Mock::given(method("GET"))
        .and(path(tags_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
