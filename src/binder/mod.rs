//! Snapshot to throw-view binding.
//!
//! [`ThrowBinder::bind`] turns one [`Snapshot`] into a [`BoundThrow`]: either
//! a fully populated [`ThrowView`] or [`BoundThrow::Unavailable`].
//!
//! Degradation is per field. Only the gating sensors (speed, throw type,
//! distance) can make the whole card unavailable; any other missing reading
//! becomes the `"N/A"` sentinel in its own field and nothing else.
//!
//! The binder keeps no state between calls. Every snapshot produces a fresh
//! view that fully replaces the previous one.

pub mod numeric;
pub mod time;

use std::fmt;

use chrono::{Local, TimeZone};

use crate::models::{SensorId, SensorState, Snapshot, ATTR_BEARING, ATTR_THROW_TIME};
use numeric::{attribute_number, parse_number, round_half_away};
use time::DEFAULT_LOCALE;

/// Sentinel shown for a reading that is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel shown when the throw time could not be formatted.
pub const FORMAT_ERROR: &str = "Error";

/// A secondary reading, or the `"N/A"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reading<T> {
    Value(T),
    NotAvailable,
}

impl<T> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reading::NotAvailable, Reading::Value)
    }
}

impl<T: fmt::Display> fmt::Display for Reading<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Value(v) => v.fmt(f),
            Reading::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Display state of the throw timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThrowTime {
    /// Localized weekday, hour and minute.
    Formatted(String),
    /// No `throw_time` attribute.
    Missing,
    /// The attribute was present but could not be formatted.
    Error,
}

impl fmt::Display for ThrowTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThrowTime::Formatted(text) => f.write_str(text),
            ThrowTime::Missing => f.write_str(NOT_AVAILABLE),
            ThrowTime::Error => f.write_str(FORMAT_ERROR),
        }
    }
}

/// Everything the card shows for one throw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThrowView {
    /// Speed sensor value, verbatim.
    pub speed: String,
    /// Spin in rpm, rounded half away from zero.
    pub spin: Reading<i64>,
    pub wobble: Reading<String>,
    pub hyzer: Reading<String>,
    pub nose: Reading<String>,
    pub launch_angle: Reading<String>,
    /// Throw classification, verbatim.
    pub throw_type: String,
    /// `"<deg>°"`, or `None` when the throw carries no bearing.
    pub bearing: Option<String>,
    pub throw_time: ThrowTime,
    /// `"<feet> ft"`.
    pub distance: Reading<String>,
}

/// Result of binding one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoundThrow {
    /// A gating sensor is missing or unavailable.
    Unavailable,
    Throw(ThrowView),
}

impl BoundThrow {
    pub fn view(&self) -> Option<&ThrowView> {
        match self {
            BoundThrow::Throw(view) => Some(view),
            BoundThrow::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, BoundThrow::Unavailable)
    }
}

/// Binds snapshots using a fixed locale and timezone for the throw time.
#[derive(Debug, Clone)]
pub struct ThrowBinder<Tz = Local> {
    locale: String,
    timezone: Tz,
}

impl Default for ThrowBinder<Local> {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl ThrowBinder<Local> {
    /// Binder formatting throw times in the host's local timezone.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            timezone: Local,
        }
    }
}

impl<Tz> ThrowBinder<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    pub fn with_timezone(locale: impl Into<String>, timezone: Tz) -> Self {
        Self {
            locale: locale.into(),
            timezone,
        }
    }

    /// Bind one snapshot. Never fails; see the module docs for fallbacks.
    pub fn bind(&self, snapshot: &Snapshot) -> BoundThrow {
        let (Some(speed), Some(throw_type), Some(distance)) = (
            snapshot.available(SensorId::Speed),
            snapshot.available(SensorId::ThrowType),
            snapshot.available(SensorId::Distance),
        ) else {
            tracing::debug!("Gating sensor missing or unavailable, no throw to show");
            return BoundThrow::Unavailable;
        };

        BoundThrow::Throw(ThrowView {
            speed: speed.value.clone(),
            spin: spin_reading(snapshot),
            wobble: text_reading(snapshot, SensorId::Wobble),
            hyzer: text_reading(snapshot, SensorId::Hyzer),
            nose: text_reading(snapshot, SensorId::Nose),
            launch_angle: text_reading(snapshot, SensorId::LaunchAngle),
            throw_type: throw_type.value.clone(),
            bearing: bearing_label(throw_type),
            throw_time: self.throw_time(throw_type),
            distance: distance_reading(distance),
        })
    }

    fn throw_time(&self, throw_type: &SensorState) -> ThrowTime {
        let Some(raw) = throw_type.attribute(ATTR_THROW_TIME) else {
            return ThrowTime::Missing;
        };

        match time::format_throw_time(raw, &self.timezone, &self.locale) {
            Ok(text) => ThrowTime::Formatted(text),
            Err(e) => {
                tracing::error!(
                    "Failed to format throw time {} (locale {}): {}",
                    raw,
                    self.locale,
                    e
                );
                ThrowTime::Error
            }
        }
    }
}

/// Bind with the default locale in the host's local timezone.
pub fn bind(snapshot: &Snapshot) -> BoundThrow {
    ThrowBinder::<Local>::default().bind(snapshot)
}

/// The sensor's state when it carries an actual reading.
fn reading(snapshot: &Snapshot, id: SensorId) -> Option<&SensorState> {
    let state = snapshot.get(id).filter(|s| s.has_reading());
    if state.is_none() {
        tracing::debug!(sensor = %id, "No reading, using sentinel");
    }
    state
}

fn spin_reading(snapshot: &Snapshot) -> Reading<i64> {
    reading(snapshot, SensorId::Spin)
        .and_then(|state| parse_number(&state.value))
        .map(round_half_away)
        .into()
}

/// Angle and wobble readings keep the upstream text unrounded.
fn text_reading(snapshot: &Snapshot, id: SensorId) -> Reading<String> {
    reading(snapshot, id).map(|state| state.value.clone()).into()
}

fn distance_reading(distance: &SensorState) -> Reading<String> {
    if !distance.has_reading() {
        return Reading::NotAvailable;
    }
    parse_number(&distance.value)
        .map(|feet| format!("{} ft", round_half_away(feet)))
        .into()
}

fn bearing_label(throw_type: &SensorState) -> Option<String> {
    let raw = throw_type.attribute(ATTR_BEARING)?;
    match attribute_number(raw) {
        Some(degrees) => Some(format!("{}°", round_half_away(degrees))),
        None => {
            tracing::warn!("Ignoring non-numeric bearing attribute: {}", raw);
            None
        }
    }
}
