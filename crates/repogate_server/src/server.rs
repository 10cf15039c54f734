//! HTTP front end for the aggregation gateway.
//!
//! Routes:
//! - `GET /healthz` - liveness probe
//! - `GET /users/{username}/repositories` - first-page repository listing
//! - `GET /users/{username}/repositories/{repo}` - aggregated repository details
//!
//! Every data route requires an `Authorization: Bearer <token>` header. The
//! token is forwarded to upstream exchanges for that request only; the
//! server holds no credentials of its own. Upstream failures surface as
//! 502 responses carrying the failure message and the call shape that
//! produced it.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use repogate::{Gateway, UpstreamError};
use serde_json::{Value, json};

/// Build the application router around a shared gateway.
pub fn router(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .route("/healthz", get(handle_healthz))
        .route("/users/{username}/repositories", get(handle_list))
        .route("/users/{username}/repositories/{repo}", get(handle_details))
        .with_state(gateway)
}

async fn handle_healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_list(
    State(gateway): State<Arc<Gateway>>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Some(token) = header_token(&headers) else {
        return missing_token_response();
    };

    match gateway.list_repositories(&username, &token).await {
        Ok(repos) => Json(repos).into_response(),
        Err(err) => upstream_error_response(&err),
    }
}

async fn handle_details(
    State(gateway): State<Arc<Gateway>>,
    Path((username, repo)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let Some(token) = header_token(&headers) else {
        return missing_token_response();
    };

    match gateway.repository_details(&username, &token, &repo).await {
        Ok(details) => Json(details).into_response(),
        Err(err) => upstream_error_response(&err),
    }
}

/// Pull the bearer token out of the request headers.
fn header_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    bearer_token(value).map(str::to_string)
}

/// Extract the token from a `Bearer <token>` authorization value.
fn bearer_token(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

fn missing_token_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "missing or malformed bearer token" })),
    )
        .into_response()
}

/// Map an upstream failure to a 502 carrying its message and origin.
fn upstream_error_response(err: &UpstreamError) -> Response {
    tracing::warn!(origin = err.origin(), "upstream failure: {}", err.message());
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "message": err.message(), "origin": err.origin() })),
    )
        .into_response()
}
