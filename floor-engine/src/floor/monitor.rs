//! Floor monitor
//!
//! Periodic refresh loop. Recomputes the floor snapshot on the policy
//! interval and publishes it on a watch channel; an errored refresh is
//! logged and the loop keeps going.

use std::sync::Arc;

use shared::floor::FloorSnapshot;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::manager::FloorManager;

pub struct FloorMonitor {
    manager: Arc<FloorManager>,
    shutdown: CancellationToken,
    snapshot_tx: watch::Sender<Option<FloorSnapshot>>,
}

impl FloorMonitor {
    pub fn new(manager: Arc<FloorManager>, shutdown: CancellationToken) -> Self {
        let (snapshot_tx, _) = watch::channel(None);
        Self {
            manager,
            shutdown,
            snapshot_tx,
        }
    }

    /// Subscribe before spawning [`run`](Self::run); the first snapshot
    /// arrives right after startup.
    pub fn subscribe(&self) -> watch::Receiver<Option<FloorSnapshot>> {
        self.snapshot_tx.subscribe()
    }

    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.manager.policy().poll_interval_secs,
            "Floor monitor started"
        );

        // Catch up immediately so the plan is never blank on startup.
        self.tick().await;
        self.periodic_loop().await;

        tracing::info!("Floor monitor stopped");
    }

    async fn periodic_loop(&self) {
        let interval = self.manager.policy().poll_interval();
        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Floor monitor received shutdown signal");
                    return;
                }
            }
            self.tick().await;
        }
    }

    async fn tick(&self) {
        match self.manager.refresh().await {
            Ok(snapshot) => {
                let _ = self.snapshot_tx.send(Some(snapshot));
            }
            Err(err) => {
                tracing::error!(error = %err, "Floor refresh failed");
            }
        }
    }
}
