//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`StaticSnapshotProvider`] - Snapshot set directly by the test, with
//!   injectable read failures

pub mod snapshot;

pub use snapshot::StaticSnapshotProvider;
