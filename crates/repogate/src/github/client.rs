//! GitHub API client.
//!
//! One client value serves both upstream call shapes: structured-query
//! (GraphQL) POSTs and resource (REST) GETs. Every failure, whatever its
//! original shape, leaves this module as an [`UpstreamError`] tagged with
//! the call shape that produced it. Credentials are forwarded per call and
//! never stored or inspected.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{Result, UpstreamError};
use super::queries;
use super::types::{ErrorBody, GraphQlEnvelope, GraphQlError};
use crate::config::UpstreamConfig;
use crate::http::{HttpError, HttpMethod, HttpRequest, HttpTransport, ReqwestTransport};

/// Client for the GitHub GraphQL and REST APIs.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    graphql_url: String,
    api_base_url: String,
    user_agent: String,
}

impl GitHubClient {
    /// Create a client backed by a real reqwest transport.
    ///
    /// The transport carries a timeout only when the configuration asks for
    /// one.
    pub fn new(config: &UpstreamConfig) -> std::result::Result<Self, HttpError> {
        let transport = match config.request_timeout() {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new(reqwest::Client::new()),
        };
        Ok(Self::new_with_transport(config, Arc::new(transport)))
    }

    pub fn new_with_transport(config: &UpstreamConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            graphql_url: config.graphql_url.trim_end_matches('/').to_string(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// REST URL of the hooks resource for one repository.
    #[must_use]
    pub fn hooks_url(&self, owner: &str, repo_name: &str) -> String {
        queries::hooks_url(&self.api_base_url, owner, repo_name)
    }

    fn headers(&self, token: &str) -> Vec<(String, String)> {
        vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.user_agent.clone()),
            ("Authorization".to_string(), format!("Bearer {token}")),
        ]
    }

    /// Send a structured query and decode its typed payload.
    ///
    /// A call fails when the transport status is non-success OR the body
    /// carries a non-empty error list; the failure message joins all
    /// reported error messages with `", "`, falling back to the body's
    /// top-level message and then the bare status. A success body that does
    /// not decode into `T` is also a failure.
    pub async fn call_structured_query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
        token: &str,
    ) -> Result<T> {
        let payload = serde_json::json!({ "query": document, "variables": variables });
        let body = serde_json::to_vec(&payload)
            .map_err(|e| UpstreamError::structured_query(format!("request encoding failed: {e}")))?;

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.graphql_url.clone(),
            headers: self.headers(token),
            body,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| UpstreamError::structured_query(e.to_string()))?;

        let success = (200..300).contains(&response.status);
        let envelope: GraphQlEnvelope<T> = match serde_json::from_slice(&response.body) {
            Ok(envelope) => envelope,
            Err(e) if success => {
                return Err(UpstreamError::structured_query(format!(
                    "malformed response body: {e}"
                )));
            }
            Err(_) => {
                return Err(UpstreamError::structured_query(failure_message(
                    response.status,
                    &response.body,
                )));
            }
        };

        if !envelope.errors.is_empty() {
            return Err(UpstreamError::structured_query(join_error_messages(
                envelope.errors,
            )));
        }
        if !success {
            return Err(UpstreamError::structured_query(failure_message(
                response.status,
                &response.body,
            )));
        }

        envelope
            .data
            .ok_or_else(|| UpstreamError::structured_query("response carried no data payload"))
    }

    /// Read a resource URL and decode its typed payload.
    ///
    /// Same failure classification as the structured-query call, with
    /// origin `"resource"`.
    pub async fn call_resource<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: self.headers(token),
            body: Vec::new(),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| UpstreamError::resource(e.to_string()))?;

        if !(200..300).contains(&response.status) {
            return Err(UpstreamError::resource(failure_message(
                response.status,
                &response.body,
            )));
        }

        match serde_json::from_slice(&response.body) {
            Ok(value) => Ok(value),
            Err(e) => {
                // A success status can still carry an error-shaped body.
                if let Some(message) = embedded_error_message(&response.body) {
                    return Err(UpstreamError::resource(message));
                }
                Err(UpstreamError::resource(format!(
                    "malformed response body: {e}"
                )))
            }
        }
    }
}

/// Join all reported error messages with `", "`.
fn join_error_messages(errors: Vec<GraphQlError>) -> String {
    errors
        .into_iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extract the error message embedded in a response body, if any.
fn embedded_error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    if !parsed.errors.is_empty() {
        return Some(join_error_messages(parsed.errors));
    }
    parsed.message
}

/// Normalized message for a failed exchange.
fn failure_message(status: u16, body: &[u8]) -> String {
    embedded_error_message(body).unwrap_or_else(|| format!("HTTP {status}"))
}
