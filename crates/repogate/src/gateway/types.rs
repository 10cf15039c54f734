//! Gateway response types.
//!
//! These are the request-scoped records the pipelines assemble and return;
//! they are never persisted. Serialization uses the camelCase field names
//! the query surface declares.

use serde::{Deserialize, Serialize};

/// One repository row produced by the list pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository name.
    pub name: String,
    /// Reported size, non-negative; 0 when the platform has not measured it.
    pub size: u64,
    /// Owner login.
    pub owner: String,
}

/// Fully aggregated details for one repository.
///
/// Built by the aggregation pipeline in a fixed order (metadata, file
/// count, optional yaml, webhooks); a value of this type only exists once
/// every source has resolved or been explicitly skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDetails {
    /// Repository name.
    pub name: String,
    /// Reported size, non-negative.
    pub size: u64,
    /// Owner login.
    pub owner: String,
    /// Whether the repository is private.
    pub private: bool,
    /// Count of root-tree entries; 0 for an empty repository.
    pub num_files: usize,
    /// Content of the first root-tree entry ending in `.yml`, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub yaml_content: Option<YamlContent>,
    /// Active webhook delivery URLs in upstream order.
    pub webhooks: Vec<String>,
}

/// Name and text of one yaml file surfaced from the root tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YamlContent {
    pub name: String,
    pub text: String,
}
