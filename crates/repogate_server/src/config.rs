//! Configuration file support for the gateway server.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `REPOGATE_`, e.g., `REPOGATE_SERVER_BIND`)
//! 3. Config file (`--config <path>` or `./repogate.toml`)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [upstream]
//! graphql_url = "https://api.github.com/graphql"  # optional, this is the default
//! api_base_url = "https://api.github.com"
//! # request_timeout_secs = 30  # no timeout unless set
//!
//! [gateway]
//! details_concurrency = 2
//! list_page_size = 10
//!
//! [server]
//! bind = "127.0.0.1:4000"
//! ```

use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, ConfigError, Environment, File, FileFormat};
use repogate::config::{GatewayConfig, UpstreamConfig};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream GitHub endpoints and transport options.
    pub upstream: UpstreamConfig,
    /// Aggregation pipeline tuning.
    pub gateway: GatewayConfig,
    /// HTTP front-end options.
    pub server: ServerConfig,
}

/// HTTP front-end configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server listens on.
    /// Can also be set via REPOGATE_SERVER_BIND environment variable.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:4000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. Config file (`path` if given, otherwise `./repogate.toml` when present)
    /// 3. Environment variables with REPOGATE_ prefix
    ///
    /// An explicitly named config file must exist; the implicit local file
    /// is optional. Multi-word keys live in the file, since each underscore
    /// in an environment variable marks a section boundary.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        match path {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                builder = builder.add_source(
                    File::from(path.to_path_buf())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                let local_config = PathBuf::from("repogate.toml");
                if local_config.exists() {
                    tracing::debug!("Loading config from ./repogate.toml");
                    builder = builder.add_source(
                        File::from(local_config)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        // Add REPOGATE_ prefixed environment variables
        // e.g., REPOGATE_SERVER_BIND -> server.bind
        builder = builder.add_source(
            Environment::with_prefix("REPOGATE")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
