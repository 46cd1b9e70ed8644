//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`SnapshotProvider`] - Source of sensor snapshots for the card

pub mod snapshot;

pub use snapshot::SnapshotProvider;
