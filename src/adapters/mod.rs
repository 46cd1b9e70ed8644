//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`FileSnapshotProvider`] - Reads a snapshot or a raw throw payload from JSON
//!
//! # Mock Implementations
//!
//! - [`mock::StaticSnapshotProvider`] - Snapshot set directly by the test

pub mod file_snapshot;
pub mod mock;

pub use file_snapshot::FileSnapshotProvider;
pub use mock::StaticSnapshotProvider;
