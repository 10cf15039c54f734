//! Gateway settings.
//!
//! Plain settings structs consumed by [`crate::github::GitHubClient`] and
//! [`crate::gateway::Gateway`]. Layered loading (config file, environment)
//! is a front-end concern and lives with the binary.

use std::time::Duration;

use serde::Deserialize;

/// Upstream endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Structured-query (GraphQL) endpoint.
    pub graphql_url: String,
    /// Base URL for resource (REST) calls.
    pub api_base_url: String,
    /// User agent sent with every upstream request.
    pub user_agent: String,
    /// Optional per-exchange timeout in seconds.
    ///
    /// Unset by default, which means a hung upstream call blocks its
    /// pipeline indefinitely; bounding it is an explicit opt-in.
    pub request_timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            graphql_url: "https://api.github.com/graphql".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            user_agent: "repogate".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    /// The configured timeout as a [`Duration`], if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Pipeline settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Maximum number of detail-aggregation pipelines in flight at once.
    /// List requests are not gated.
    pub details_concurrency: usize,
    /// Page size of the list query; only the first page is ever fetched.
    pub list_page_size: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            details_concurrency: 2,
            list_page_size: 10,
        }
    }
}
