//! Raw throw payload from the disc's cloud service.
//!
//! The hosted integration turns each payload into eight sensors before the
//! card ever sees it. [`ThrowRecord::into_snapshot`] performs the same mapping
//! so a saved payload can be displayed directly.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::sensor::{SensorId, SensorState, Snapshot, ATTR_BEARING, ATTR_THROW_TIME};

/// Firestore-style timestamp attached to a throw.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThrowTimestamp {
    #[serde(rename = "_seconds")]
    pub seconds: Option<f64>,
    #[serde(rename = "_nanoseconds")]
    pub nanoseconds: Option<f64>,
}

/// One throw as returned by the service. Every field is optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowRecord {
    pub id: Option<String>,
    pub speed_mph: Option<f64>,
    pub estimated_feet: Option<f64>,
    pub corrected_hyzer_angle: Option<f64>,
    pub corrected_nose_angle: Option<f64>,
    pub rot_per_sec: Option<f64>,
    pub uphill_angle: Option<f64>,
    pub off_axis_degrees: Option<f64>,
    pub primary_type: Option<String>,
    pub secondary_type: Option<String>,
    pub throw_time: Option<ThrowTimestamp>,
    pub temp: Option<f64>,
    pub bearing: Option<f64>,
    pub estimated_flight_numbers: Option<Value>,
    pub handedness: Option<String>,
    pub device_id: Option<String>,
}

impl ThrowRecord {
    /// Whether this payload carries a usable throw.
    ///
    /// The service answers idle polls with a minimal payload; only a payload
    /// with a complete `throwTime` is a real throw.
    pub fn is_throw(&self) -> bool {
        self.throw_time
            .as_ref()
            .is_some_and(|t| t.seconds.is_some() && t.nanoseconds.is_some())
    }

    /// Throw time in epoch milliseconds, when present and representable.
    pub fn throw_time_millis(&self) -> Option<i64> {
        let time = self.throw_time.as_ref()?;
        let seconds = whole_i64(time.seconds?.trunc())?;
        let nanos = time.nanoseconds.unwrap_or(0.0);
        if !nanos.is_finite() {
            return None;
        }
        seconds
            .checked_mul(1000)?
            .checked_add((nanos / 1_000_000.0).floor() as i64)
    }

    /// `"Primary - Secondary"`, or just the primary type.
    pub fn throw_type_label(&self) -> String {
        let primary = self.primary_type.as_deref().unwrap_or_default();
        match self.secondary_type.as_deref() {
            Some(secondary) if !secondary.is_empty() => format!("{} - {}", primary, secondary),
            _ => primary.to_string(),
        }
    }

    /// Map the payload onto the eight card sensors.
    ///
    /// A payload that is not a throw yields every sensor `unavailable`.
    pub fn into_snapshot(self) -> Snapshot {
        if !self.is_throw() {
            return Snapshot::all_unavailable();
        }

        let spin_rpm = (self.rot_per_sec.unwrap_or(0.0).abs() * 60.0).round_ties_even();

        Snapshot::new()
            .with_value(SensorId::Speed, one_decimal(self.speed_mph))
            .with_value(SensorId::Distance, one_decimal(self.estimated_feet))
            .with_value(SensorId::Hyzer, one_decimal(self.corrected_hyzer_angle))
            .with_value(SensorId::Nose, one_decimal(self.corrected_nose_angle))
            .with_value(SensorId::LaunchAngle, one_decimal(self.uphill_angle))
            .with_value(SensorId::Wobble, one_decimal(self.off_axis_degrees))
            .with_value(SensorId::Spin, format!("{:.1}", spin_rpm))
            .with(SensorId::ThrowType, self.throw_type_state())
    }

    fn throw_type_state(&self) -> SensorState {
        let mut attributes = Map::new();
        let seconds = self.throw_time.as_ref().and_then(|t| t.seconds);
        attributes.insert(ATTR_THROW_TIME.to_string(), seconds_value(seconds));
        attributes.insert("temperature".to_string(), number_value(self.temp));
        attributes.insert(ATTR_BEARING.to_string(), number_value(self.bearing));
        attributes.insert("uphill_angle".to_string(), number_value(self.uphill_angle));
        attributes.insert(
            "off_axis_degrees".to_string(),
            number_value(self.off_axis_degrees),
        );
        attributes.insert(
            "estimated_flight_numbers".to_string(),
            self.estimated_flight_numbers.clone().unwrap_or(Value::Null),
        );
        attributes.insert(
            "handedness".to_string(),
            self.handedness.clone().map(Value::String).unwrap_or(Value::Null),
        );
        attributes.insert(
            "device_id".to_string(),
            self.device_id.clone().map(Value::String).unwrap_or(Value::Null),
        );

        SensorState {
            value: self.throw_type_label(),
            attributes,
        }
    }
}

/// Round to one decimal place, ties to even, missing readings count as zero.
///
/// Fixed-precision formatting rounds the exact binary value, so `0.15`
/// (stored just below) gives `0.1` and the exact tie `55.25` gives `55.2`.
fn one_decimal(value: Option<f64>) -> String {
    format!("{:.1}", value.unwrap_or(0.0))
}

fn number_value(value: Option<f64>) -> Value {
    value
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Whole seconds stay integers so they print without a fraction. Anything
/// outside `i64` is kept as a float rather than saturated.
fn seconds_value(seconds: Option<f64>) -> Value {
    match seconds.and_then(whole_i64) {
        Some(whole) => Value::from(whole),
        None => number_value(seconds),
    }
}

/// `value` as an `i64`, if it is a whole number inside the `i64` range.
fn whole_i64(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
