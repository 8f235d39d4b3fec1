use tokio::time::Duration;
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crypto_job_board::board::{BoardHandle, JobBoard};
use crypto_job_board::config;
use crypto_job_board::shutdown::ShutdownCoordinator;
use crypto_job_board::worker::FeedWorker;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from environment
    let config::Config {
        seed_count,
        refresh_interval_secs,
        max_listings,
        log_dir,
    } = config::Config::from_env().expect("Failed to load configuration");

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&log_dir).expect("Failed to create logs directory");

    // File-based logging with daily rotation, plus console output.
    // Log files land as logs/info.YYYY-MM-DD.log and logs/error.YYYY-MM-DD.log
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(&log_dir, "info.log");
    let error_file = tracing_appender::rolling::daily(&log_dir, "error.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(error_layer)
        .init();

    info!("Starting crypto-job-board");
    info!("Configuration loaded successfully:");
    info!("  - Seed count: {} listings", seed_count);
    info!("  - Refresh interval: {} seconds", refresh_interval_secs);
    info!("  - Collection capacity: {} listings", max_listings);

    // Seed the board once at startup; the feed worker takes over from here
    let board = BoardHandle::new(JobBoard::new(max_listings));
    board.seed(seed_count);

    let snapshot = board.snapshot();
    let shown = snapshot.visible.as_ref().map(Vec::len).unwrap_or(0);
    info!("Board seeded: showing {} of {} listings", shown, snapshot.total);

    // Create shutdown channel for graceful shutdown
    // watch channel lets the worker observe the stop signal mid-tick
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let feed_worker = FeedWorker::new(
        board.clone(),
        Duration::from_secs(refresh_interval_secs),
    );
    let worker_handle = tokio::spawn(feed_worker.run(shutdown_rx));
    info!("Spawned live-feed worker");

    // Wait for CTRL+C / SIGTERM and tear the timer down cleanly
    let coordinator = ShutdownCoordinator::new(worker_handle, shutdown_tx);
    coordinator.wait_for_shutdown().await
}
