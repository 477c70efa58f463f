use std::fmt::Display;
use std::future::Future;
use tracing::{info, warn};

/// Resolve on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = signal_or_pending("Ctrl+C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = signal_or_pending("SIGTERM", async {
        let mut signal =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        signal.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Draining in-flight requests...");
}

/// Wait for a signal. A handler that cannot be installed never fires.
async fn signal_or_pending<E: Display>(name: &str, signal: impl Future<Output = Result<(), E>>) {
    if let Err(e) = signal.await {
        warn!("Failed to listen for {}: {}", name, e);
        std::future::pending::<()>().await;
    }
}
