//! File-based snapshot provider adapter.
//!
//! The file holds either a snapshot map keyed by sensor identifier:
//!
//! ```json
//! {
//!   "speed": { "state": "55.2" },
//!   "throw_type": { "state": "Backhand", "attributes": { "throw_time": 1700000000 } },
//!   "distance": { "state": 310.9 }
//! }
//! ```
//!
//! or a raw throw payload as returned by the cloud service (detected by its
//! `throwTime` or `speedMph` key), which is mapped through
//! [`ThrowRecord::into_snapshot`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CardError, CardResult};
use crate::models::{Snapshot, ThrowRecord};
use crate::traits::SnapshotProvider;

/// Keys that mark a raw throw payload.
const THROW_PAYLOAD_KEYS: [&str; 2] = ["throwTime", "speedMph"];

/// Snapshot provider reading a JSON file on every call.
#[derive(Debug, Clone)]
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotProvider for FileSnapshotProvider {
    fn snapshot(&self) -> CardResult<Snapshot> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            // Not written yet: same as no throw
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::trace!("Snapshot file {} not found", self.path.display());
                return Ok(Snapshot::new());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Snapshot::new());
        }

        parse_snapshot(&contents)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Parse snapshot file contents in either supported format.
pub fn parse_snapshot(contents: &str) -> CardResult<Snapshot> {
    let value: Value = serde_json::from_str(contents)?;

    let Value::Object(object) = &value else {
        return Err(CardError::Snapshot(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    };

    if THROW_PAYLOAD_KEYS.iter().any(|key| object.contains_key(*key)) {
        let record: ThrowRecord = serde_json::from_value(value)?;
        tracing::debug!(
            "Read throw payload {:?} (throw time {:?} ms)",
            record.id,
            record.throw_time_millis()
        );
        return Ok(record.into_snapshot());
    }

    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
