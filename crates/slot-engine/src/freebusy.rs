//! Compute free time slots from busy intervals.
//!
//! Each business day in the window is handled on its own: that day's busy
//! intervals are merged, then the gaps between merged periods inside business
//! hours become free slots. Gaps shorter than the minimum are dropped.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::busy::BusyInterval;
use crate::clock::{self, Clock};
use crate::merge::merge_intervals;
use crate::time::format_time;

/// Start of business hours (10:00), in minutes since midnight.
pub const WORK_START: u32 = 10 * 60;
/// End of business hours (19:00), in minutes since midnight.
pub const WORK_END: u32 = 19 * 60;
/// Shortest gap reported as a free slot.
pub const MIN_SLOT_MINUTES: u32 = 60;

/// The daily search window and minimum slot length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub start: u32,
    pub end: u32,
    pub min_slot_minutes: u32,
}

impl BusinessHours {
    pub const DEFAULT: Self = Self {
        start: WORK_START,
        end: WORK_END,
        min_slot_minutes: MIN_SLOT_MINUTES,
    };
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A free time slot on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSlot {
    pub date: NaiveDate,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl FreeSlot {
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// Start as `"HH:MM"`.
    pub fn start_time(&self) -> String {
        format_time(self.start_minute)
    }

    /// End as `"HH:MM"`.
    pub fn end_time(&self) -> String {
        format_time(self.end_minute)
    }
}

/// Whether `date` falls on a weekday (Monday through Friday).
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The `days` consecutive calendar dates starting at `start`.
///
/// Weekends are included here; the extractor skips them without extending the
/// window.
pub fn day_window(start: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take(days as usize)
}

/// Free slots on a single date.
///
/// Only intervals whose `date` matches are considered. The weekday of `date`
/// is not checked.
pub fn find_free_slots_on(
    date: NaiveDate,
    busy: &[BusyInterval],
    hours: &BusinessHours,
) -> Vec<FreeSlot> {
    let day_busy: Vec<(u32, u32)> = busy
        .iter()
        .filter(|b| b.date == date)
        .map(BusyInterval::range)
        .collect();
    let merged = merge_intervals(day_busy);
    trace!(%date, merged = merged.len(), "merged busy periods");

    let slot = |start_minute, end_minute| FreeSlot {
        date,
        start_minute,
        end_minute,
    };
    let long_enough = |start: u32, end: u32| end > start && end - start >= hours.min_slot_minutes;

    let mut free_slots = Vec::new();
    let mut cursor = hours.start;

    for &(busy_start, busy_end) in &merged {
        if busy_start > cursor && busy_start - cursor >= hours.min_slot_minutes {
            // A busy period starting after hours still closes the day at `end`.
            let clipped_end = busy_start.min(hours.end);
            if long_enough(cursor, clipped_end) {
                free_slots.push(slot(cursor, clipped_end));
            }
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing free slot after the last busy period.
    if cursor < hours.end && long_enough(cursor, hours.end) {
        free_slots.push(slot(cursor, hours.end));
    }

    free_slots
}

/// Find free slots across `days` calendar dates starting today, using the
/// default business hours.
///
/// Busy intervals may overlap, come from several people and arrive in any
/// order. Intervals outside business hours or outside the window have no
/// effect. Returns slots ordered by date, then start time.
pub fn find_free_slots<C: Clock + ?Sized>(
    busy: &[BusyInterval],
    days: u32,
    clock: &C,
) -> Vec<FreeSlot> {
    find_free_slots_with(busy, days, clock, &BusinessHours::DEFAULT)
}

/// Like [`find_free_slots`] with explicit business hours.
pub fn find_free_slots_with<C: Clock + ?Sized>(
    busy: &[BusyInterval],
    days: u32,
    clock: &C,
    hours: &BusinessHours,
) -> Vec<FreeSlot> {
    // Read the clock once so the whole window shares one "today".
    let today = clock::today(clock);

    let mut free_slots = Vec::new();
    for date in day_window(today, days) {
        if !is_business_day(date) {
            debug!(%date, "skipping weekend");
            continue;
        }
        free_slots.extend(find_free_slots_on(date, busy, hours));
    }

    debug!(%today, days, busy = busy.len(), free = free_slots.len(), "free slot search complete");
    free_slots
}

/// Find the first free slot of at least `min_duration_minutes` in the window.
///
/// Delegates to [`find_free_slots`] and returns the first slot meeting the
/// duration requirement.
pub fn find_first_free_slot<C: Clock + ?Sized>(
    busy: &[BusyInterval],
    days: u32,
    clock: &C,
    min_duration_minutes: u32,
) -> Option<FreeSlot> {
    find_free_slots(busy, days, clock)
        .into_iter()
        .find(|slot| slot.duration_minutes() >= min_duration_minutes)
}
