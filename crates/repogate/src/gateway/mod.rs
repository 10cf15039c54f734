//! Aggregation pipelines.
//!
//! The [`Gateway`] is the query surface of the crate: one value serves all
//! requests for the lifetime of a deployment. It owns the upstream client
//! and the admission gate bounding how many detail-aggregation pipelines
//! run at once.
//!
//! The details pipeline is strictly ordered: metadata and root tree, file
//! count, optional yaml content, webhook list, assembly. Every sub-fetch
//! failure aborts the whole pipeline; no partial record is ever returned.
//! The list pipeline is a single reshaped query and is not gated.

mod types;

pub use types::{RepositoryDetails, RepositorySummary, YamlContent};

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::GatewayConfig;
use crate::github::{
    queries, GitHubClient, RepositoriesData, RepositoryDetailsData, Result, TreeEntry,
    UpstreamError, Webhook, YamlFileData,
};

/// Read-only aggregation gateway over one upstream platform.
#[derive(Clone)]
pub struct Gateway {
    client: GitHubClient,
    /// Admission gate for detail pipelines. FIFO, released on every exit
    /// path including failures.
    details_gate: Arc<Semaphore>,
    list_page_size: u32,
}

impl Gateway {
    /// Create a gateway with its own admission gate sized from `config`.
    pub fn new(client: GitHubClient, config: &GatewayConfig) -> Self {
        Self::new_with_gate(
            client,
            config,
            Arc::new(Semaphore::new(config.details_concurrency)),
        )
    }

    /// Create a gateway sharing an existing admission gate.
    ///
    /// Useful when several gateway values must count against one bound, or
    /// to scope the gate in tests.
    pub fn new_with_gate(
        client: GitHubClient,
        config: &GatewayConfig,
        details_gate: Arc<Semaphore>,
    ) -> Self {
        Self {
            client,
            details_gate,
            list_page_size: config.list_page_size,
        }
    }

    /// List the first page of repositories owned by `username`.
    ///
    /// One structured query, reshaped; never gated and never paginated past
    /// the first page.
    #[tracing::instrument(skip(self, token))]
    pub async fn list_repositories(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Vec<RepositorySummary>> {
        let data: RepositoriesData = self
            .client
            .call_structured_query(
                queries::LIST_REPOSITORIES_QUERY,
                queries::list_variables(username, self.list_page_size),
                token,
            )
            .await?;

        let user = data
            .user
            .ok_or_else(|| UpstreamError::structured_query(format!("unknown user: {username}")))?;

        let summaries: Vec<RepositorySummary> = user
            .repositories
            .nodes
            .into_iter()
            .map(|node| RepositorySummary {
                name: node.name,
                size: node.disk_usage.unwrap_or(0),
                owner: node.owner.login,
            })
            .collect();

        tracing::debug!(count = summaries.len(), "listed repositories");
        Ok(summaries)
    }

    /// Aggregate the details of one repository.
    ///
    /// Holds one admission-gate slot for the whole pipeline. The sub-fetches
    /// run in a fixed order and any failure aborts the aggregation; the
    /// caller sees a single [`UpstreamError`] tagged with the call shape
    /// that failed.
    #[tracing::instrument(skip(self, token))]
    pub async fn repository_details(
        &self,
        username: &str,
        token: &str,
        repo_name: &str,
    ) -> Result<RepositoryDetails> {
        // FIFO admission; the permit spans every sub-fetch below and is
        // released when this function returns, success or failure.
        let _permit = match self.details_gate.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                tracing::warn!("details gate closed unexpectedly");
                return Err(UpstreamError::structured_query(
                    "details gate closed unexpectedly",
                ));
            }
        };

        let data: RepositoryDetailsData = self
            .client
            .call_structured_query(
                queries::REPOSITORY_DETAILS_QUERY,
                queries::details_variables(username, repo_name),
                token,
            )
            .await?;

        let metadata = data.repository.ok_or_else(|| {
            UpstreamError::structured_query(format!("unknown repository: {username}/{repo_name}"))
        })?;

        // File inventory comes from the metadata response; an absent root
        // tree means an empty repository.
        let num_files = metadata.object.as_ref().map_or(0, |tree| tree.entries.len());
        let yaml_entry = metadata
            .object
            .as_ref()
            .and_then(|tree| find_yaml_entry(&tree.entries))
            .map(|entry| entry.name.clone());

        let yaml_content = match yaml_entry {
            Some(entry_name) => Some(
                self.fetch_yaml_content(username, repo_name, &entry_name, token)
                    .await?,
            ),
            None => None,
        };

        let webhooks = self.fetch_webhooks(username, repo_name, token).await?;

        tracing::debug!(num_files, webhooks = webhooks.len(), "aggregated repository details");

        Ok(RepositoryDetails {
            name: metadata.name,
            size: metadata.disk_usage.unwrap_or(0),
            owner: metadata.owner.login,
            private: metadata.is_private,
            num_files,
            yaml_content,
            webhooks,
        })
    }

    /// Fetch the text of one root-tree yaml entry.
    async fn fetch_yaml_content(
        &self,
        username: &str,
        repo_name: &str,
        entry_name: &str,
        token: &str,
    ) -> Result<YamlContent> {
        let data: YamlFileData = self
            .client
            .call_structured_query(
                queries::YAML_CONTENT_QUERY,
                queries::yaml_variables(username, repo_name, entry_name),
                token,
            )
            .await?;

        let text = data
            .repository
            .and_then(|repository| repository.object)
            .and_then(|blob| blob.text)
            .ok_or_else(|| {
                UpstreamError::structured_query(format!("no text content for {entry_name}"))
            })?;

        Ok(YamlContent {
            name: entry_name.to_string(),
            text,
        })
    }

    /// Fetch the repository's webhook list and project it to active
    /// delivery URLs, preserving upstream order.
    async fn fetch_webhooks(
        &self,
        username: &str,
        repo_name: &str,
        token: &str,
    ) -> Result<Vec<String>> {
        let url = self.client.hooks_url(username, repo_name);
        let hooks: Vec<Webhook> = self.client.call_resource(&url, token).await?;

        Ok(hooks
            .into_iter()
            .filter(|hook| hook.active)
            .filter_map(|hook| hook.config.url)
            .collect())
    }
}

/// First root-tree entry ending in `.yml`, by upstream listing order.
fn find_yaml_entry(entries: &[TreeEntry]) -> Option<&TreeEntry> {
    entries.iter().find(|entry| entry.name.ends_with(".yml"))
}
