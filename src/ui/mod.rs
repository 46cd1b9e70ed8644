//! Card rendering.

pub mod card;
pub mod theme;

pub use card::{render, render_to_text, MetricCell, PanelEntry, ThrowCard, NO_DATA_MESSAGE};
