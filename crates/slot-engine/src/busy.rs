//! Busy intervals as supplied by the calendar side.
//!
//! The wire form (`RawBusySlot`) carries a `YYYY-MM-DD` date and `HH:MM`
//! bounds. It is converted once, up front, into a [`BusyInterval`] so the
//! merge and extraction passes work on plain minute values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::{format_time, parse_time};

/// A busy range on one date, in minutes since midnight.
///
/// `start_minute < end_minute` always holds for values built through
/// [`BusyInterval::new`] or [`BusyInterval::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub date: NaiveDate,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl BusyInterval {
    /// Build an interval from minute values.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if `start_minute >= end_minute`.
    pub fn new(date: NaiveDate, start_minute: u32, end_minute: u32) -> Result<Self> {
        if start_minute >= end_minute {
            return Err(SlotError::InvalidInterval {
                start: format_time(start_minute),
                end: format_time(end_minute),
            });
        }
        Ok(Self {
            date,
            start_minute,
            end_minute,
        })
    }

    /// Build an interval from its wire strings.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDate`, `SlotError::InvalidTime` or
    /// `SlotError::InvalidInterval` for malformed input.
    pub fn parse(date: &str, start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(date)?, parse_time(start)?, parse_time(end)?)
    }

    /// The `(start, end)` minute pair.
    pub fn range(&self) -> (u32, u32) {
        (self.start_minute, self.end_minute)
    }
}

/// Busy range as it arrives from a calendar provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBusySlot {
    pub start_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl TryFrom<&RawBusySlot> for BusyInterval {
    type Error = SlotError;

    fn try_from(raw: &RawBusySlot) -> Result<Self> {
        BusyInterval::parse(&raw.start_date, &raw.start_time, &raw.end_time)
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `SlotError::InvalidDate` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SlotError::InvalidDate(s.to_string()))
}
