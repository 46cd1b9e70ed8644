//! throwcard - a terminal card showing the latest disc-golf throw
//!
//! The core is two pure steps: [`binder::bind`] turns a sensor
//! [`models::Snapshot`] into a [`binder::BoundThrow`], and [`ui::render`]
//! turns that into a [`ui::ThrowCard`] drawn with ratatui. Everything else
//! feeds snapshots in (providers, the watcher) or hosts the card (the app
//! and the binary).
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod binder;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod watcher;
