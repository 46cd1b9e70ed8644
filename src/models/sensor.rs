//! Sensor state snapshot types.
//!
//! A [`Snapshot`] is the full set of sensor values at one point in time, keyed
//! by sensor identifier. It is the only input the binder reads.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// State value reported while a sensor has no data (before the first throw,
/// while reconnecting, ...).
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// State value reported when a sensor exists but its reading is unknown.
pub const STATE_UNKNOWN: &str = "unknown";

/// Attribute on the throw-type sensor holding the throw's Unix time in seconds.
pub const ATTR_THROW_TIME: &str = "throw_time";

/// Attribute on the throw-type sensor holding the compass bearing in degrees.
pub const ATTR_BEARING: &str = "bearing";

/// The eight sensors the card knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorId {
    Speed,
    Spin,
    Wobble,
    Hyzer,
    Nose,
    LaunchAngle,
    ThrowType,
    Distance,
}

impl SensorId {
    /// Every sensor, in display order.
    pub const ALL: [SensorId; 8] = [
        SensorId::Speed,
        SensorId::Spin,
        SensorId::Wobble,
        SensorId::Hyzer,
        SensorId::Nose,
        SensorId::LaunchAngle,
        SensorId::ThrowType,
        SensorId::Distance,
    ];

    /// Sensors whose absence makes the whole card unavailable.
    pub const GATING: [SensorId; 3] = [SensorId::Speed, SensorId::ThrowType, SensorId::Distance];

    /// Snapshot key for this sensor.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorId::Speed => "speed",
            SensorId::Spin => "spin",
            SensorId::Wobble => "wobble",
            SensorId::Hyzer => "hyzer",
            SensorId::Nose => "nose",
            SensorId::LaunchAngle => "launch_angle",
            SensorId::ThrowType => "throw_type",
            SensorId::Distance => "distance",
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sensor's current value and attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorState {
    /// Reported value. Numeric readings are kept as their decimal text.
    #[serde(rename = "state", alias = "value", deserialize_with = "state_text")]
    pub value: String,
    /// Open-ended attribute map.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl SensorState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            attributes: Map::new(),
        }
    }

    /// A sensor reporting [`STATE_UNAVAILABLE`].
    pub fn unavailable() -> Self {
        Self::new(STATE_UNAVAILABLE)
    }

    /// Builder: attach an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn is_unavailable(&self) -> bool {
        self.value == STATE_UNAVAILABLE
    }

    /// True when the value is an actual reading rather than a placeholder
    /// (`unavailable`, `unknown` or empty).
    pub fn has_reading(&self) -> bool {
        let value = self.value.trim();
        !(value.is_empty() || value == STATE_UNAVAILABLE || value == STATE_UNKNOWN)
    }

    /// Attribute lookup; JSON `null` counts as absent.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }
}

/// Accepts string, number or boolean states; `null` becomes `unknown`.
fn state_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => STATE_UNKNOWN.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Full set of sensor states at one point in time.
///
/// Keys are sensor identifiers. Unknown keys are kept but never read; missing
/// keys are treated exactly like an `unavailable` sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    sensors: BTreeMap<String, SensorState>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a sensor's state.
    pub fn with(mut self, id: SensorId, state: SensorState) -> Self {
        self.insert(id, state);
        self
    }

    /// Builder: set a sensor to a plain value with no attributes.
    pub fn with_value(self, id: SensorId, value: impl Into<String>) -> Self {
        self.with(id, SensorState::new(value))
    }

    pub fn insert(&mut self, id: SensorId, state: SensorState) {
        self.sensors.insert(id.as_str().to_string(), state);
    }

    pub fn get(&self, id: SensorId) -> Option<&SensorState> {
        self.sensors.get(id.as_str())
    }

    /// The sensor's state if it is present and not `unavailable`.
    pub fn available(&self, id: SensorId) -> Option<&SensorState> {
        self.get(id).filter(|state| !state.is_unavailable())
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Snapshot with every known sensor set to `unavailable`.
    pub fn all_unavailable() -> Self {
        SensorId::ALL
            .into_iter()
            .fold(Self::new(), |snapshot, id| {
                snapshot.with(id, SensorState::unavailable())
            })
    }
}

impl FromIterator<(SensorId, SensorState)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (SensorId, SensorState)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (id, state) in iter {
            snapshot.insert(id, state);
        }
        snapshot
    }
}
