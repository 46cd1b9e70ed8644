//! Throw-time formatting.
//!
//! Formatting is the one binder step with a typed failure path. The caller
//! collapses a [`FormatError`] into the `"Error"` sentinel and keeps going.

use std::fmt::{self, Write};

use chrono::{DateTime, Locale, TimeZone, Utc};
use serde_json::Value;

use super::numeric::attribute_number;
use crate::error::FormatError;

/// Weekday, hour and minute, e.g. `"Thursday, 3:45 PM"`.
pub const THROW_TIME_FORMAT: &str = "%A, %-I:%M %p";

/// Default locale for weekday names and the AM/PM marker.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Convert a `throw_time` attribute (Unix seconds) to localized display text.
pub fn format_throw_time<Tz>(raw: &Value, timezone: &Tz, locale: &str) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let seconds = attribute_number(raw).ok_or_else(|| FormatError::NotNumeric(raw.to_string()))?;
    let locale = resolve_locale(locale)?;

    let millis = seconds * 1000.0;
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return Err(FormatError::OutOfRange(seconds));
    }
    let instant = DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
        .ok_or(FormatError::OutOfRange(seconds))?;

    let mut text = String::new();
    write!(
        text,
        "{}",
        instant
            .with_timezone(timezone)
            .format_localized(THROW_TIME_FORMAT, locale)
    )
    .map_err(|e| FormatError::Formatter(e.to_string()))?;
    Ok(text)
}

/// Parse a POSIX locale name such as `"en_US"` or `"de_DE"`.
pub fn resolve_locale(name: &str) -> Result<Locale, FormatError> {
    Locale::try_from(name).map_err(|_| FormatError::UnknownLocale(name.to_string()))
}
