//! Data models for sensor snapshots and raw throw payloads.

pub mod sensor;
pub mod throw_record;

pub use sensor::{
    SensorId, SensorState, Snapshot, ATTR_BEARING, ATTR_THROW_TIME, STATE_UNAVAILABLE,
    STATE_UNKNOWN,
};
pub use throw_record::{ThrowRecord, ThrowTimestamp};
