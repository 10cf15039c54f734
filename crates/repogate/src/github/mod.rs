//! GitHub upstream integration.
//!
//! This module owns everything that touches the remote platform: the query
//! documents, the wire shapes they decode into, the client that issues the
//! two upstream call shapes, and the normalized failure type every error is
//! collapsed into.
//!
//! # Module Structure
//!
//! - [`error`] - Normalized upstream failure type
//! - [`types`] - Wire shapes for GraphQL payloads and REST resources
//! - [`queries`] - Query documents, variable builders, URL templates
//! - [`client`] - The client issuing structured-query and resource calls

mod client;
mod error;
pub mod queries;
mod types;

// Re-export error types
pub use error::{Result, UpstreamError};

// Re-export the client
pub use client::GitHubClient;

// Re-export the wire types the pipelines decode into
pub use types::{
    RepositoriesData, RepositoryDetailsData, RepositoryMetadata, TreeEntry, Webhook, YamlFileData,
};
