//! Wall-clock codec: `"HH:MM"` strings to minute-of-day and back.

use crate::error::{Result, SlotError};

/// Minutes in one calendar day. Also the minute value of `"24:00"`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a 24-hour `"HH:MM"` string into minutes since midnight.
///
/// Hours run `0..=23` and minutes `0..=59`. `"24:00"` is accepted as the
/// end-of-day bound and maps to [`MINUTES_PER_DAY`]. Single-digit fields
/// (`"9:05"`) are accepted.
///
/// # Errors
/// Returns `SlotError::InvalidTime` for anything else.
pub fn parse_time(s: &str) -> Result<u32> {
    let invalid = || SlotError::InvalidTime(s.to_string());

    let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
    let hour = parse_field(hour).ok_or_else(invalid)?;
    let minute = parse_field(minute).ok_or_else(invalid)?;

    match (hour, minute) {
        (24, 0) => Ok(MINUTES_PER_DAY),
        (h, m) if h < 24 && m < 60 => Ok(h * 60 + m),
        _ => Err(invalid()),
    }
}

/// Format minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// Inverse of [`parse_time`] over `0..=MINUTES_PER_DAY`.
pub fn format_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
