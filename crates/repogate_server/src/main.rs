//! Repogate server - HTTP front end for the repository aggregation gateway.

mod config;
mod server;
mod shutdown;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use repogate::{Gateway, GitHubClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repogate-server")]
#[command(version)]
#[command(about = "A read-only aggregation gateway over GitHub")]
#[command(
    long_about = "Repogate serves coarse-grained repository queries by composing GitHub's \
GraphQL and REST APIs: a first-page repository listing, and an all-or-nothing \
detail aggregation covering metadata, file counts, yaml content, and active \
webhooks. Callers authenticate per request with a bearer token, which is \
forwarded upstream untouched."
)]
#[command(after_long_help = r#"EXAMPLES
    Run with defaults (listens on 127.0.0.1:4000):
        $ repogate-server

    Listen on all interfaces:
        $ repogate-server --bind 0.0.0.0:8080

    Run against a config file:
        $ repogate-server --config /etc/repogate.toml

    Query the gateway:
        $ curl -H "Authorization: Bearer $GITHUB_TOKEN" \
            http://127.0.0.1:4000/users/octocat/repositories

CONFIGURATION
    Repogate reads configuration from:
      1. ./repogate.toml (or the file named by --config)
      2. Environment variables (REPOGATE_* prefix)
      3. .env file in current directory

ENVIRONMENT VARIABLES
    REPOGATE_SERVER_BIND      Socket address to listen on (default: 127.0.0.1:4000)
    RUST_LOG                  Log filter (overrides -v/-q)
"#)]
struct Cli {
    /// Path to a TOML config file (default: ./repogate.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Socket address to listen on (overrides config)
    #[arg(short, long)]
    bind: Option<String>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all but warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_log_filter(cli.verbose, cli.quiet)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    // Load configuration (config file -> env vars -> defaults)
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    let client = GitHubClient::new(&config.upstream)?;
    let gateway = Arc::new(Gateway::new(client, &config.gateway));
    let app = server::router(gateway);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    let addr = listener.local_addr()?;

    tracing::info!(
        "Listening on http://{} (details concurrency: {}, upstream: {})",
        addr,
        config.gateway.details_concurrency,
        config.upstream.graphql_url
    );
    if config.upstream.request_timeout_secs.is_none() {
        tracing::debug!("No upstream request timeout configured; exchanges wait indefinitely");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    Ok(())
}

/// Default log filter derived from the verbosity flags.
fn default_log_filter(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    format!("repogate={level},repogate_server={level}")
}
