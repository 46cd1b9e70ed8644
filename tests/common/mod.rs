//! Common fixtures for integration tests.

#![allow(dead_code)]

use chrono::Utc;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use throwcard::binder::ThrowBinder;
use throwcard::models::{SensorId, SensorState, Snapshot, ATTR_BEARING, ATTR_THROW_TIME};
use throwcard::ui::ThrowCard;

/// 2023-11-14 22:13:20 UTC, a Tuesday
pub const THROW_TIME: i64 = 1_700_000_000;

/// Binder pinned to UTC so formatted times are stable.
pub fn utc_binder() -> ThrowBinder<Utc> {
    ThrowBinder::with_timezone("en_US", Utc)
}

/// Throw-type sensor with a throw time and the given bearing attribute.
pub fn throw_type(label: &str, bearing: Option<serde_json::Value>) -> SensorState {
    let state = SensorState::new(label).with_attribute(ATTR_THROW_TIME, THROW_TIME);
    match bearing {
        Some(bearing) => state.with_attribute(ATTR_BEARING, bearing),
        None => state,
    }
}

/// The "Forehand Flat" throw: every sensor valid, bearing 182.6.
pub fn forehand_snapshot() -> Snapshot {
    Snapshot::new()
        .with_value(SensorId::Speed, "55.2")
        .with_value(SensorId::Spin, "1820.4")
        .with_value(SensorId::Wobble, "3.5")
        .with_value(SensorId::Hyzer, "-4.3")
        .with_value(SensorId::Nose, "1.0")
        .with_value(SensorId::LaunchAngle, "9.0")
        .with_value(SensorId::Distance, "310.9")
        .with(
            SensorId::ThrowType,
            throw_type("Forehand Flat", Some(serde_json::json!(182.6))),
        )
}

/// Draw `card` on a test terminal and return each row as text.
pub fn draw(card: &ThrowCard, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| f.render_widget(card, f.area()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
