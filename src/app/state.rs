//! Observable card state.

use std::fmt;

use crate::binder::BoundThrow;

/// The two states the card can be in.
///
/// There is no separate loading state: a provider that is still connecting
/// reports `unavailable` sensors, which is [`CardState::NoData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    /// Placeholder shown
    #[default]
    NoData,
    /// Metric grid and side panel shown
    HasThrow,
}

impl From<&BoundThrow> for CardState {
    fn from(bound: &BoundThrow) -> Self {
        match bound {
            BoundThrow::Unavailable => CardState::NoData,
            BoundThrow::Throw(_) => CardState::HasThrow,
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::NoData => f.write_str("NoData"),
            CardState::HasThrow => f.write_str("HasThrow"),
        }
    }
}
