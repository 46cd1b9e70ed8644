//! Throw card rendering.
//!
//! [`render`] maps a [`BoundThrow`] onto a [`ThrowCard`] presentation tree;
//! the tree's [`Widget`] impl draws it. Both steps are pure: the same input
//! always produces the same tree and the same buffer contents.
//!
//! ## Layout
//!
//! ```text
//! ╭ Latest Throw ──────────────────────────────────────────────────╮
//! │   55.2 mph       1820 rpm         3.5°     │ Type: Backhand    │
//! │    Speed           Spin          Wobble    │ Bearing: 183°     │
//! │                                            │ Time: Tuesday, ...│
//! │    -4.3°           1.0°           9.0°     │ Distance: 311 ft  │
//! │    Hyzer           Nose          Launch    │                   │
//! ╰────────────────────────────────────────────────────────────────╯
//! ```
//!
//! With no throw the card shows a single placeholder line instead.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::binder::{BoundThrow, ThrowTime, ThrowView, NOT_AVAILABLE};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SENTINEL, COLOR_THROW_TYPE,
    COLOR_VALUE,
};

/// Placeholder text when no throw is available.
pub const NO_DATA_MESSAGE: &str = "No throw data available";

/// Side panel labels.
pub const LABEL_THROW_TYPE: &str = "Type";
pub const LABEL_BEARING: &str = "Bearing";
pub const LABEL_TIME: &str = "Time";
pub const LABEL_DISTANCE: &str = "Distance";

/// Inner width below which the side panel moves under the metric grid.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 56;

/// Side panel width in the wide layout, including its left rule.
const PANEL_WIDTH: u16 = 28;

/// Two metric rows of two lines each, one blank line between them.
const METRIC_GRID_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricSlot {
    Speed,
    Spin,
    Wobble,
    Hyzer,
    Nose,
    LaunchAngle,
}

impl MetricSlot {
    fn value(self, view: &ThrowView) -> String {
        match self {
            MetricSlot::Speed => view.speed.clone(),
            MetricSlot::Spin => view.spin.to_string(),
            MetricSlot::Wobble => view.wobble.to_string(),
            MetricSlot::Hyzer => view.hyzer.to_string(),
            MetricSlot::Nose => view.nose.to_string(),
            MetricSlot::LaunchAngle => view.launch_angle.to_string(),
        }
    }
}

/// Fixed position, label and unit of every metric.
const METRIC_LAYOUT: [[(MetricSlot, &str, &str); 3]; 2] = [
    [
        (MetricSlot::Speed, "Speed", "mph"),
        (MetricSlot::Spin, "Spin", "rpm"),
        (MetricSlot::Wobble, "Wobble", "°"),
    ],
    [
        (MetricSlot::Hyzer, "Hyzer", "°"),
        (MetricSlot::Nose, "Nose", "°"),
        (MetricSlot::LaunchAngle, "Launch", "°"),
    ],
];

/// One cell of the metric grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCell {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl MetricCell {
    /// Value with its unit, e.g. `"55.2 mph"` or `"3.5°"`. Sentinels and
    /// values that already end in the unit are shown as they are.
    pub fn display_value(&self) -> String {
        if self.value == NOT_AVAILABLE
            || self.unit.is_empty()
            || self.value.trim_end().ends_with(self.unit)
        {
            return self.value.clone();
        }
        if self.unit.chars().all(char::is_alphabetic) {
            format!("{} {}", self.value, self.unit)
        } else {
            format!("{}{}", self.value, self.unit)
        }
    }
}

/// One `label: value` line of the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub label: &'static str,
    pub value: String,
}

/// Presentation tree for the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThrowCard {
    /// No throw data; only the title and a placeholder line.
    Placeholder { title: String },
    /// Metric grid plus side panel.
    Throw {
        title: String,
        rows: [[MetricCell; 3]; 2],
        panel: Vec<PanelEntry>,
    },
}

impl ThrowCard {
    pub fn title(&self) -> &str {
        match self {
            ThrowCard::Placeholder { title } | ThrowCard::Throw { title, .. } => title,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ThrowCard::Placeholder { .. })
    }

    /// Metric cells in reading order (top row first).
    pub fn cells(&self) -> impl Iterator<Item = &MetricCell> {
        let rows: &[[MetricCell; 3]] = match self {
            ThrowCard::Throw { rows, .. } => rows,
            ThrowCard::Placeholder { .. } => &[],
        };
        rows.iter().flatten()
    }

    pub fn panel(&self) -> &[PanelEntry] {
        match self {
            ThrowCard::Throw { panel, .. } => panel,
            ThrowCard::Placeholder { .. } => &[],
        }
    }

    /// Side panel value for `label`, if that line is shown.
    pub fn panel_value(&self, label: &str) -> Option<&str> {
        self.panel()
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
    }

    /// Rows needed to draw the whole card at `width`, borders included.
    pub fn preferred_height(&self, width: u16) -> u16 {
        match self {
            ThrowCard::Placeholder { .. } => 5,
            ThrowCard::Throw { panel, .. } => {
                let panel_rows = panel.len() as u16;
                if width.saturating_sub(2) >= WIDE_LAYOUT_MIN_WIDTH {
                    2 + METRIC_GRID_HEIGHT.max(panel_rows)
                } else {
                    2 + METRIC_GRID_HEIGHT + 1 + panel_rows
                }
            }
        }
    }
}

/// Build the card for a bound throw.
pub fn render(bound: &BoundThrow, title: &str) -> ThrowCard {
    let Some(view) = bound.view() else {
        return ThrowCard::Placeholder {
            title: title.to_string(),
        };
    };

    let rows = METRIC_LAYOUT.map(|row| {
        row.map(|(slot, label, unit)| MetricCell {
            label,
            value: slot.value(view),
            unit,
        })
    });

    let mut panel = vec![PanelEntry {
        label: LABEL_THROW_TYPE,
        value: view.throw_type.clone(),
    }];
    if let Some(bearing) = &view.bearing {
        panel.push(PanelEntry {
            label: LABEL_BEARING,
            value: bearing.clone(),
        });
    }
    panel.push(PanelEntry {
        label: LABEL_TIME,
        value: view.throw_time.to_string(),
    });
    panel.push(PanelEntry {
        label: LABEL_DISTANCE,
        value: view.distance.to_string(),
    });

    ThrowCard::Throw {
        title: title.to_string(),
        rows,
        panel,
    }
}

impl Widget for &ThrowCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Span::styled(
                format!(" {} ", self.title()),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match self {
            ThrowCard::Placeholder { .. } => render_placeholder(inner, buf),
            ThrowCard::Throw { rows, panel, .. } => render_throw(rows, panel, inner, buf),
        }
    }
}

fn render_placeholder(area: Rect, buf: &mut Buffer) {
    let line = Line::styled(
        NO_DATA_MESSAGE,
        Style::default()
            .fg(COLOR_DIM)
            .add_modifier(Modifier::ITALIC),
    );

    // Center vertically in the area
    let y_offset = area.height.saturating_sub(1) / 2;
    let centered = Rect::new(area.x, area.y + y_offset, area.width, 1);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(centered, buf);
}

fn render_throw(rows: &[[MetricCell; 3]; 2], panel: &[PanelEntry], area: Rect, buf: &mut Buffer) {
    let (grid_area, panel_area, panel_borders) = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(PANEL_WIDTH)])
            .split(area);
        (chunks[0], chunks[1], Borders::LEFT)
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(METRIC_GRID_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);
        (chunks[0], chunks[1], Borders::TOP)
    };

    render_metric_grid(rows, grid_area, buf);
    render_panel(panel, panel_area, panel_borders, buf);
}

fn render_metric_grid(rows: &[[MetricCell; 3]; 2], area: Rect, buf: &mut Buffer) {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Top row
            Constraint::Length(1), // Gap
            Constraint::Length(2), // Bottom row
        ])
        .split(area);

    for (row, row_area) in rows.iter().zip([row_areas[0], row_areas[2]]) {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(row_area);

        for (cell, cell_area) in row.iter().zip(cell_areas.iter()) {
            render_metric_cell(cell, *cell_area, buf);
        }
    }
}

fn render_metric_cell(cell: &MetricCell, area: Rect, buf: &mut Buffer) {
    let value_style = if cell.value == NOT_AVAILABLE {
        Style::default().fg(COLOR_SENTINEL)
    } else {
        Style::default()
            .fg(COLOR_VALUE)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(cell.display_value(), value_style)),
        Line::from(Span::styled(cell.label, Style::default().fg(COLOR_DIM))),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_panel(panel: &[PanelEntry], area: Rect, borders: Borders, buf: &mut Buffer) {
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines: Vec<Line> = panel
        .iter()
        .map(|entry| {
            let prefix = format!(" {}: ", entry.label);
            let room = (inner.width as usize).saturating_sub(prefix.width());
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(COLOR_DIM)),
                Span::styled(truncate_to_width(&entry.value, room), panel_value_style(entry)),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}

fn panel_value_style(entry: &PanelEntry) -> Style {
    match entry.label {
        LABEL_THROW_TYPE => Style::default()
            .fg(COLOR_THROW_TYPE)
            .add_modifier(Modifier::BOLD),
        LABEL_TIME if entry.value == ThrowTime::Error.to_string() => {
            Style::default().fg(COLOR_ERROR)
        }
        _ if entry.value == NOT_AVAILABLE => Style::default().fg(COLOR_SENTINEL),
        _ => Style::default().fg(COLOR_VALUE),
    }
}

/// Truncate to `max_width` display columns, adding "..." when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(1);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Draw the card off-screen and return it as plain text, one line per row.
pub fn render_to_text(card: &ThrowCard, width: u16) -> String {
    let area = Rect::new(0, 0, width, card.preferred_height(width));
    let mut buf = Buffer::empty(area);
    card.render(area, &mut buf);

    (0..area.height)
        .map(|y| {
            let row: String = (0..area.width).map(|x| buf[(x, y)].symbol()).collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::Reading;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_view() -> ThrowView {
        ThrowView {
            speed: "55.2".to_string(),
            spin: Reading::Value(1820),
            wobble: Reading::NotAvailable,
            hyzer: Reading::Value("-4.3".to_string()),
            nose: Reading::Value("1.0".to_string()),
            launch_angle: Reading::Value("9.0".to_string()),
            throw_type: "Forehand Flat".to_string(),
            bearing: Some("183°".to_string()),
            throw_time: ThrowTime::Formatted("Tuesday, 10:13 PM".to_string()),
            distance: Reading::Value("311 ft".to_string()),
        }
    }

    fn buffer_text(card: &ThrowCard, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(card, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_unavailable_renders_placeholder() {
        let card = render(&BoundThrow::Unavailable, "Latest Throw");
        assert_eq!(
            card,
            ThrowCard::Placeholder {
                title: "Latest Throw".to_string()
            }
        );
        assert_eq!(card.cells().count(), 0);
        assert!(card.panel().is_empty());
    }

    #[test]
    fn test_metric_layout_is_fixed() {
        let card = render(&BoundThrow::Throw(sample_view()), "Card");
        let cells: Vec<(&str, &str, &str)> = card
            .cells()
            .map(|c| (c.label, c.value.as_str(), c.unit))
            .collect();

        assert_eq!(
            cells,
            vec![
                ("Speed", "55.2", "mph"),
                ("Spin", "1820", "rpm"),
                ("Wobble", "N/A", "°"),
                ("Hyzer", "-4.3", "°"),
                ("Nose", "1.0", "°"),
                ("Launch", "9.0", "°"),
            ]
        );
    }

    #[test]
    fn test_side_panel_order() {
        let card = render(&BoundThrow::Throw(sample_view()), "Card");
        let labels: Vec<&str> = card.panel().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Type", "Bearing", "Time", "Distance"]);
        assert_eq!(card.panel_value(LABEL_DISTANCE), Some("311 ft"));
        assert_eq!(card.panel_value(LABEL_TIME), Some("Tuesday, 10:13 PM"));
    }

    #[test]
    fn test_missing_bearing_omits_line() {
        let view = ThrowView {
            bearing: None,
            ..sample_view()
        };
        let card = render(&BoundThrow::Throw(view), "Card");

        assert_eq!(card.panel_value(LABEL_BEARING), None);
        assert_eq!(card.panel().len(), 3);

        let text = render_to_text(&card, 80);
        assert!(!text.contains("Bearing"), "unexpected bearing line:\n{text}");
    }

    #[test]
    fn test_display_value_units() {
        let cell = MetricCell {
            label: "Speed",
            value: "55.2".to_string(),
            unit: "mph",
        };
        assert_eq!(cell.display_value(), "55.2 mph");

        let cell = MetricCell {
            label: "Hyzer",
            value: "-4.3".to_string(),
            unit: "°",
        };
        assert_eq!(cell.display_value(), "-4.3°");

        let cell = MetricCell {
            label: "Spin",
            value: "N/A".to_string(),
            unit: "rpm",
        };
        assert_eq!(cell.display_value(), "N/A");
    }

    #[test]
    fn test_display_value_keeps_existing_unit() {
        let cell = MetricCell {
            label: "Speed",
            value: "55.2 mph".to_string(),
            unit: "mph",
        };
        assert_eq!(cell.display_value(), "55.2 mph");

        let cell = MetricCell {
            label: "Wobble",
            value: "3.5°".to_string(),
            unit: "°",
        };
        assert_eq!(cell.display_value(), "3.5°");
    }

    #[test]
    fn test_placeholder_buffer() {
        let card = render(&BoundThrow::Unavailable, "Latest Throw");
        let rows = buffer_text(&card, 60, 7);

        assert!(rows.iter().any(|r| r.contains(NO_DATA_MESSAGE)));
        assert!(rows[0].contains("Latest Throw"));
        assert!(!rows.iter().any(|r| r.contains("Speed")));
    }

    #[test]
    fn test_wide_throw_buffer() {
        let card = render(&BoundThrow::Throw(sample_view()), "Latest Throw");
        let rows = buffer_text(&card, 90, card.preferred_height(90));
        let text = rows.join("\n");

        for expected in [
            "55.2 mph",
            "1820 rpm",
            "N/A",
            "-4.3°",
            "Launch",
            "Type: Forehand Flat",
            "Bearing: 183°",
            "Time: Tuesday, 10:13 PM",
            "Distance: 311 ft",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in\n{text}");
        }
        assert!(!text.contains(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_narrow_layout_stacks_panel() {
        let card = render(&BoundThrow::Throw(sample_view()), "Latest Throw");
        let height = card.preferred_height(40);
        assert_eq!(height, 2 + 5 + 1 + 4);

        let text = render_to_text(&card, 40);
        let lines: Vec<&str> = text.lines().collect();
        let speed_row = lines.iter().position(|l| l.contains("55.2 mph")).unwrap();
        let type_row = lines.iter().position(|l| l.contains("Type:")).unwrap();
        assert!(type_row > speed_row + 2);
    }

    #[test]
    fn test_render_is_idempotent() {
        let bound = BoundThrow::Throw(sample_view());
        let first = render(&bound, "Latest Throw");
        let second = render(&bound, "Latest Throw");

        assert_eq!(first, second);
        assert_eq!(buffer_text(&first, 90, 9), buffer_text(&second, 90, 9));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Backhand", 20), "Backhand");
        assert_eq!(truncate_to_width("Backhand - Hyzer Flip", 10), "Backha...");
        assert_eq!(truncate_to_width("Backhand", 2), "Ba");
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let card = render(&BoundThrow::Throw(sample_view()), "Latest Throw");
        let rows = buffer_text(&card, 4, 2);
        assert_eq!(rows.len(), 2);
    }
}
