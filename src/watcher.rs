//! Snapshot change detection via polling.
//!
//! Snapshot sources have no change notification, so the watcher polls the
//! provider on an interval and pushes a snapshot to the UI only when it
//! differs from the last one sent. The first snapshot is always sent.
//!
//! A transient read failure (a half-written file, a source that is briefly
//! gone) keeps the last snapshot on screen. Only when nothing was sent yet, or
//! the failure is permanent, does the watcher fall back to an empty snapshot,
//! which binds to the unavailable card. Failures are logged once per distinct
//! error, not on every poll.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::Snapshot;
use crate::traits::SnapshotProvider;

/// Read the provider once, degrading a failure to an empty snapshot.
///
/// For one-shot reads with no earlier snapshot to fall back on. The error text
/// is returned alongside for the caller to report.
pub fn read_snapshot(provider: &dyn SnapshotProvider) -> (Snapshot, Option<String>) {
    match provider.snapshot() {
        Ok(snapshot) => (snapshot, None),
        Err(e) => (Snapshot::new(), Some(e.to_string())),
    }
}

/// Spawn the snapshot polling task.
///
/// # Arguments
///
/// * `provider` - Snapshot source
/// * `interval` - Time between reads
/// * `snapshot_tx` - Channel receiving changed snapshots
///
/// # Returns
///
/// A JoinHandle that can be used to abort the task on shutdown. The task
/// also stops on its own once the receiver is dropped.
pub fn spawn_snapshot_watcher(
    provider: Arc<dyn SnapshotProvider>,
    interval: Duration,
    snapshot_tx: mpsc::UnboundedSender<Snapshot>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(
            "Snapshot watcher started ({}, interval: {}ms)",
            provider.describe(),
            interval.as_millis()
        );

        let mut last_sent: Option<Snapshot> = None;
        let mut last_error: Option<String> = None;

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let snapshot = match provider.snapshot() {
                Ok(snapshot) => {
                    if last_error.take().is_some() {
                        tracing::info!("Snapshot source recovered");
                    }
                    snapshot
                }
                Err(e) => {
                    let keep_last = e.is_transient() && last_sent.is_some();
                    let message = e.to_string();
                    if last_error.as_ref() != Some(&message) {
                        if keep_last {
                            tracing::warn!("Snapshot read failed, keeping last snapshot: {}", message);
                        } else {
                            tracing::warn!("Snapshot read failed, showing no data: {}", message);
                        }
                    }
                    last_error = Some(message);

                    if keep_last {
                        continue;
                    }
                    Snapshot::new()
                }
            };

            if last_sent.as_ref() == Some(&snapshot) {
                tracing::trace!("Snapshot unchanged");
                continue;
            }

            tracing::debug!("Snapshot changed ({} sensors)", snapshot.len());
            last_sent = Some(snapshot.clone());

            if snapshot_tx.send(snapshot).is_err() {
                tracing::debug!("Snapshot channel closed, stopping watcher");
                break;
            }
        }

        tracing::debug!("Snapshot watcher stopped");
    })
}
