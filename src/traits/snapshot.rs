//! Snapshot provider trait abstraction.
//!
//! The card never acquires telemetry itself. Whatever maintains the sensor
//! values (a host integration, a file on disk, a test) sits behind this
//! trait and is polled by the watcher.

use crate::error::CardResult;
use crate::models::Snapshot;

/// Source of the current sensor snapshot.
///
/// Implementations must be cheap to call repeatedly; the watcher calls
/// [`SnapshotProvider::snapshot`] once per poll interval.
///
/// # Example
///
/// ```
/// use throwcard::adapters::mock::StaticSnapshotProvider;
/// use throwcard::models::{SensorId, Snapshot};
/// use throwcard::traits::SnapshotProvider;
///
/// let provider = StaticSnapshotProvider::new(
///     Snapshot::new().with_value(SensorId::Speed, "55.2"),
/// );
/// let snapshot = provider.snapshot().unwrap();
/// assert_eq!(snapshot.get(SensorId::Speed).unwrap().value, "55.2");
/// ```
pub trait SnapshotProvider: Send + Sync {
    /// Read the current snapshot.
    ///
    /// An error means the source could not be read at all. A readable
    /// source with no throw yet reports `unavailable` sensors instead.
    fn snapshot(&self) -> CardResult<Snapshot>;

    /// Short label for log lines.
    fn describe(&self) -> String {
        "snapshot provider".to_string()
    }
}
