//! Wall-clock helpers. Every time of day inside the crate is a minute offset
//! from midnight; `"HH:MM"` strings only exist at the wire boundary.

use chrono::{NaiveTime, Timelike};

use crate::errors::{VetError, VetResult};

/// Minutes in a day. Also the largest valid minute offset, written `24:00`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses an `"HH:MM"` clock string into a minute offset from midnight.
///
/// `"24:00"` is accepted as end-of-day so that a clinic can close at midnight.
/// The hour may be written with one digit (`"7:05"` is 425).
pub fn parse_clock(value: &str) -> VetResult<u32> {
    let value = value.trim();
    if value == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }

    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        VetError::Validation(format!("Invalid time '{}'. Expected HH:MM", value))
    })?;

    Ok(time.hour() * 60 + time.minute())
}

/// Formats a minute offset as `"HH:MM"`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Checks that a raw minute value fits inside a single day.
pub fn minute_of_day(value: i64, field: &str) -> VetResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|minute| *minute <= MINUTES_PER_DAY)
        .ok_or_else(|| {
            VetError::Validation(format!(
                "{} must be between 0 and {}, got {}",
                field, MINUTES_PER_DAY, value
            ))
        })
}
