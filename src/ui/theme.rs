//! Color theme constants for the throw card.
//!
//! Same minimal dark palette as the rest of the terminal UI.

use ratatui::style::Color;

/// Card border - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title and highlighted text
pub const COLOR_ACCENT: Color = Color::White;

/// Labels, units and the no-data placeholder
pub const COLOR_DIM: Color = Color::DarkGray;

/// Metric values
pub const COLOR_VALUE: Color = Color::White;

/// Throw classification in the side panel
pub const COLOR_THROW_TYPE: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Readings shown as the "N/A" sentinel
pub const COLOR_SENTINEL: Color = Color::Gray;

/// Throw time that failed to format
pub const COLOR_ERROR: Color = Color::Red;
