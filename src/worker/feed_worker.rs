use tokio::sync::watch;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info};

use crate::board::BoardHandle;

/// Background worker simulating a live job feed.
///
/// On every tick it asks the board for one refresh (generate, prepend,
/// truncate) and surfaces the injected listing to the log. The loop is
/// driven by a single recurring timer and stops promptly on the shutdown
/// signal, so no timer outlives teardown.
pub struct FeedWorker {
    board: BoardHandle,
    period: Duration,
}

impl FeedWorker {
    pub fn new(board: BoardHandle, period: Duration) -> Self {
        Self { board, period }
    }

    pub async fn run(self, mut shutdown_rx: watch::Receiver<bool>) {
        info!("Feed worker started (refresh every {:?})", self.period);

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval completes immediately; the
        // feed should first fire one full period after startup
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.refresh_once();
                }
                changed = shutdown_rx.changed() => {
                    match changed {
                        Ok(()) if !*shutdown_rx.borrow() => continue,
                        _ => {
                            info!("Feed worker received shutdown signal, stopping");
                            break;
                        }
                    }
                }
            }
        }
    }

    fn refresh_once(&self) {
        let listing = self.board.refresh();

        match serde_json::to_string(&listing) {
            Ok(json) => info!("New listing injected: {}", json),
            Err(e) => error!("Failed to serialize injected listing: {:?}", e),
        }

        let snapshot = self.board.snapshot();
        let shown = snapshot.visible.as_ref().map(Vec::len).unwrap_or(0);
        info!("Live feed: showing {} of {} listings", shown, snapshot.total);
    }
}
