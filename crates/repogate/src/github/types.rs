//! GitHub wire types.
//!
//! Deserialize-only shapes for the GraphQL payloads and the webhook REST
//! resource. Only the fields the pipelines read are declared, which keeps
//! decoding resilient to upstream schema additions. Nullable positions in
//! the upstream schema are `Option` here; a payload that cannot be decoded
//! into these shapes is treated as an upstream failure, never passed through.

use serde::Deserialize;

/// Envelope wrapping every GraphQL response body.
///
/// A non-empty `errors` list marks the call as failed even when the
/// transport status is a success.
#[derive(Debug, Deserialize)]
pub struct GraphQlEnvelope<T> {
    /// Typed payload; `null` or absent on failed calls.
    pub data: Option<T>,
    /// Errors reported by the query endpoint.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of a GraphQL `errors` list.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Error body shape shared by failed REST and GraphQL responses.
///
/// Both APIs report either a top-level `message` or an `errors` list;
/// everything else in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// Payload of the list query: one page of a user's repositories.
#[derive(Debug, Deserialize)]
pub struct RepositoriesData {
    /// `null` when the login does not resolve to a user.
    pub user: Option<UserRepositories>,
}

#[derive(Debug, Deserialize)]
pub struct UserRepositories {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryConnection {
    #[serde(default)]
    pub nodes: Vec<RepositoryNode>,
}

/// One repository node from the list query.
#[derive(Debug, Deserialize)]
pub struct RepositoryNode {
    /// Repository name.
    pub name: String,
    /// Reported size; the platform reports `null` for repositories it has
    /// not measured yet.
    #[serde(rename = "diskUsage")]
    pub disk_usage: Option<u64>,
    /// Owner of the repository.
    pub owner: OwnerNode,
}

/// Owner login wrapper used by both queries.
#[derive(Debug, Deserialize)]
pub struct OwnerNode {
    pub login: String,
}

/// Payload of the details query: metadata plus the root tree.
#[derive(Debug, Deserialize)]
pub struct RepositoryDetailsData {
    /// `null` when the owner/name pair does not resolve to a repository.
    pub repository: Option<RepositoryMetadata>,
}

/// Repository metadata with root-tree entry names.
#[derive(Debug, Deserialize)]
pub struct RepositoryMetadata {
    /// Repository name.
    pub name: String,
    /// Reported size, `null` when unmeasured.
    #[serde(rename = "diskUsage")]
    pub disk_usage: Option<u64>,
    /// Owner of the repository.
    pub owner: OwnerNode,
    /// Whether the repository is private.
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    /// Root tree object; `null` for an empty repository.
    pub object: Option<TreeObject>,
}

/// Root tree of a repository.
#[derive(Debug, Deserialize)]
pub struct TreeObject {
    /// Top-level entries in upstream listing order.
    #[serde(default)]
    pub entries: Vec<TreeEntry>,
}

/// One entry of the root tree.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    pub name: String,
}

/// Payload of the yaml content query.
#[derive(Debug, Deserialize)]
pub struct YamlFileData {
    pub repository: Option<YamlRepository>,
}

#[derive(Debug, Deserialize)]
pub struct YamlRepository {
    /// Blob addressed by the requested expression; `null` when the path no
    /// longer resolves.
    pub object: Option<BlobObject>,
}

/// Blob content from the yaml query.
#[derive(Debug, Deserialize)]
pub struct BlobObject {
    /// Text content; `null` for binary blobs.
    pub text: Option<String>,
}

/// One webhook from the repository hooks REST resource.
#[derive(Debug, Deserialize)]
pub struct Webhook {
    /// Delivery configuration.
    #[serde(default)]
    pub config: WebhookConfig,
    /// Whether deliveries are enabled for this hook.
    pub active: bool,
}

/// Webhook delivery configuration.
///
/// Some hook kinds carry no delivery URL; those hooks are dropped during
/// projection rather than surfaced as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,
}
