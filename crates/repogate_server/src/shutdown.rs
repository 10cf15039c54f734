//! Graceful shutdown on Ctrl+C.

/// Resolve when the operator requests shutdown with Ctrl+C.
///
/// Passed to the server as its shutdown future: once it resolves, the
/// listener stops accepting and in-flight requests drain. A second Ctrl+C
/// while draining force-quits the process.
pub(crate) async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");

    tracing::info!("Shutdown requested, draining in-flight requests");

    tokio::spawn(async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install second Ctrl+C handler");

        tracing::warn!("Force quit");
        std::process::exit(130);
    });
}
