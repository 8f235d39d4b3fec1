use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handles graceful shutdown of the application
///
/// The live-feed timer must never dangle past teardown, so shutdown:
/// 1. Listens for shutdown signals (SIGTERM, SIGINT/CTRL+C)
/// 2. Signals the feed worker to stop ticking
/// 3. Waits for the worker task to finish
pub struct ShutdownCoordinator {
    worker_handle: JoinHandle<()>,
    shutdown_tx: watch::Sender<bool>,
}

impl ShutdownCoordinator {
    pub fn new(worker_handle: JoinHandle<()>, shutdown_tx: watch::Sender<bool>) -> Self {
        Self {
            worker_handle,
            shutdown_tx,
        }
    }

    /// Block until CTRL+C or SIGTERM arrives, then stop the feed worker
    /// and wait for it to exit.
    pub async fn wait_for_shutdown(self) -> Result<(), std::io::Error> {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received CTRL+C signal, initiating graceful shutdown...");
            }
            _ = terminate => {
                info!("Received SIGTERM signal, initiating graceful shutdown...");
            }
        }

        self.shutdown().await
    }

    async fn shutdown(self) -> Result<(), std::io::Error> {
        info!("Signaling feed worker to stop...");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal to feed worker: {:?}", e);
        }

        info!("Waiting for feed worker to stop...");
        match self.worker_handle.await {
            Ok(()) => info!("Feed worker stopped"),
            Err(e) => error!("Feed worker task panicked: {:?}", e),
        }

        info!("Graceful shutdown completed successfully");
        Ok(())
    }
}
