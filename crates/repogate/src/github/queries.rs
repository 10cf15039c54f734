//! GraphQL query documents and upstream URL templates.
//!
//! The documents select exactly the fields the wire types in
//! [`super::types`] declare; variables are built here so the pipelines never
//! hand-assemble JSON.

use serde_json::{json, Value};

/// First page of a user's repositories.
pub const LIST_REPOSITORIES_QUERY: &str = "\
query ($owner: String!, $first: Int!) {
  user(login: $owner) {
    repositories(first: $first) {
      nodes {
        name
        diskUsage
        owner { login }
      }
    }
  }
}";

/// Repository metadata plus root-tree entry names.
pub const REPOSITORY_DETAILS_QUERY: &str = "\
query ($owner: String!, $repoName: String!) {
  repository(owner: $owner, name: $repoName) {
    name
    diskUsage
    owner { login }
    isPrivate
    object(expression: \"HEAD:\") {
      ... on Tree {
        entries { name }
      }
    }
  }
}";

/// Text content of one blob addressed by a `HEAD:`-prefixed path.
pub const YAML_CONTENT_QUERY: &str = "\
query ($owner: String!, $repoName: String!, $fileName: String!) {
  repository(owner: $owner, name: $repoName) {
    object(expression: $fileName) {
      ... on Blob {
        text
      }
    }
  }
}";

/// Variables for [`LIST_REPOSITORIES_QUERY`].
pub fn list_variables(owner: &str, first: u32) -> Value {
    json!({ "owner": owner, "first": first })
}

/// Variables for [`REPOSITORY_DETAILS_QUERY`].
pub fn details_variables(owner: &str, repo_name: &str) -> Value {
    json!({ "owner": owner, "repoName": repo_name })
}

/// Variables for [`YAML_CONTENT_QUERY`].
///
/// `entry_name` is a root-tree entry name; the blob is addressed at the
/// repository head.
pub fn yaml_variables(owner: &str, repo_name: &str, entry_name: &str) -> Value {
    json!({
        "owner": owner,
        "repoName": repo_name,
        "fileName": format!("HEAD:{entry_name}"),
    })
}

/// REST URL of the repository hooks resource.
pub fn hooks_url(api_base_url: &str, owner: &str, repo_name: &str) -> String {
    format!("{api_base_url}/repos/{owner}/{repo_name}/hooks")
}
