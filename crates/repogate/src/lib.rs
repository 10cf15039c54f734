//! Repogate - a read-only aggregation gateway over GitHub.
//!
//! This library composes GitHub's GraphQL and REST surfaces into two
//! coarse-grained queries: a first-page repository listing and an
//! all-or-nothing repository detail aggregation. Detail aggregations are
//! admitted through a FIFO gate so at most a configured number run at
//! once, while the listing path is never gated.
//!
//! # Example
//!
//! ```ignore
//! use repogate::config::{GatewayConfig, UpstreamConfig};
//! use repogate::{Gateway, GitHubClient};
//!
//! let client = GitHubClient::new(&UpstreamConfig::default())?;
//! let gateway = Gateway::new(client, &GatewayConfig::default());
//!
//! let repos = gateway.list_repositories("octocat", token).await?;
//! let details = gateway.repository_details("octocat", token, "hello-world").await?;
//! ```

pub mod config;
pub mod gateway;
pub mod github;
pub mod http;

pub use gateway::{Gateway, RepositoryDetails, RepositorySummary, YamlContent};
pub use github::{GitHubClient, Result, UpstreamError};
