//! Error types for upstream GitHub API operations.

use thiserror::Error;

/// Normalized upstream failure.
///
/// Every upstream error, regardless of its original shape (non-success
/// transport status, GraphQL error list, malformed body), is collapsed into
/// one of these two variants before it reaches pipeline logic. The variant
/// records which upstream call shape produced the failure.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// A structured-query (GraphQL) call failed.
    #[error("GitHub GraphQL API error: {message}")]
    StructuredQuery { message: String },

    /// A resource (REST) call failed.
    #[error("GitHub REST API error: {message}")]
    Resource { message: String },
}

impl UpstreamError {
    /// Create a structured-query failure.
    #[inline]
    pub fn structured_query(message: impl Into<String>) -> Self {
        Self::StructuredQuery {
            message: message.into(),
        }
    }

    /// Create a resource failure.
    #[inline]
    pub fn resource(message: impl Into<String>) -> Self {
        Self::Resource {
            message: message.into(),
        }
    }

    /// The call shape that produced this failure.
    #[must_use]
    pub fn origin(&self) -> &'static str {
        match self {
            Self::StructuredQuery { .. } => "structured-query",
            Self::Resource { .. } => "resource",
        }
    }

    /// The normalized message, without the origin prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::StructuredQuery { message } | Self::Resource { message } => message,
        }
    }
}

/// Result type for upstream and pipeline operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;
