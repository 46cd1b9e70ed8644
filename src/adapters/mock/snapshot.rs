//! In-memory snapshot provider for testing.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{CardError, CardResult};
use crate::models::Snapshot;
use crate::traits::SnapshotProvider;

/// Snapshot provider whose current snapshot is set by the test.
///
/// Clones share state, so a test can keep one handle and hand another to
/// the watcher.
///
/// # Example
///
/// ```
/// use throwcard::adapters::mock::StaticSnapshotProvider;
/// use throwcard::models::{SensorId, Snapshot};
/// use throwcard::traits::SnapshotProvider;
///
/// let provider = StaticSnapshotProvider::empty();
/// assert!(provider.snapshot().unwrap().is_empty());
///
/// provider.set(Snapshot::all_unavailable());
/// assert_eq!(provider.snapshot().unwrap().len(), 8);
///
/// provider.set_fail_with(Some("disconnected".to_string()));
/// assert!(provider.snapshot().is_err());
/// assert_eq!(provider.read_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotProvider {
    /// Current snapshot
    snapshot: Arc<Mutex<Snapshot>>,
    /// When set, reads fail with this message
    fail_with: Arc<Mutex<Option<String>>>,
    /// Failures are reported as non-transient
    permanent: Arc<AtomicBool>,
    /// Number of reads so far
    reads: Arc<AtomicUsize>,
}

impl StaticSnapshotProvider {
    /// Create a provider returning `snapshot`.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(snapshot)),
            ..Default::default()
        }
    }

    /// Create a provider returning an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the current snapshot.
    pub fn set(&self, snapshot: Snapshot) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    /// Configure whether reads fail with a transient error, and with what message.
    pub fn set_fail_with(&self, message: Option<String>) {
        self.permanent.store(false, Ordering::SeqCst);
        *self.fail_with.lock().unwrap() = message;
    }

    /// Like [`set_fail_with`](Self::set_fail_with), but the error is not transient.
    pub fn set_fail_permanently(&self, message: Option<String>) {
        self.permanent.store(true, Ordering::SeqCst);
        *self.fail_with.lock().unwrap() = message;
    }

    /// Number of times the snapshot has been read.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl SnapshotProvider for StaticSnapshotProvider {
    fn snapshot(&self) -> CardResult<Snapshot> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            if self.permanent.load(Ordering::SeqCst) {
                return Err(CardError::Config {
                    path: PathBuf::from("static snapshot"),
                    message,
                });
            }
            return Err(CardError::Snapshot(message));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "static snapshot".to_string()
    }
}
