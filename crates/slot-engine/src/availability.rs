//! Team-wide availability across several calendars.
//!
//! Each participant's calendar contributes its own busy intervals. A minute is
//! free for the team only if no calendar is busy then, so every calendar is
//! flattened into one busy set before extraction.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::busy::{BusyInterval, RawBusySlot};
use crate::clock::{self, Clock};
use crate::error::Result;
use crate::freebusy::{self, FreeSlot};
use crate::merge::merge_intervals;

/// Identifier used for busy input that is not grouped by calendar.
pub const UNGROUPED_CALENDAR_ID: &str = "combined";

/// Busy intervals from one calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarBusy {
    /// Opaque identifier for the calendar (for example an account address).
    pub calendar_id: String,
    pub busy: Vec<BusyInterval>,
}

/// A merged busy period on one date in the team view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyBlock {
    pub date: NaiveDate,
    pub start_minute: u32,
    pub end_minute: u32,
    /// Number of calendars with at least one interval inside this block.
    pub source_count: usize,
}

/// Flatten every calendar into one busy list.
pub fn flatten(calendars: &[CalendarBusy]) -> Vec<BusyInterval> {
    calendars
        .iter()
        .flat_map(|c| c.busy.iter().copied())
        .collect()
}

/// Free slots shared by every calendar over `days` dates starting today.
pub fn find_common_free_slots<C: Clock + ?Sized>(
    calendars: &[CalendarBusy],
    days: u32,
    clock: &C,
) -> Vec<FreeSlot> {
    freebusy::find_free_slots(&flatten(calendars), days, clock)
}

/// Merged busy blocks on `date`, with how many calendars fed each block.
pub fn busy_blocks_on(calendars: &[CalendarBusy], date: NaiveDate) -> Vec<BusyBlock> {
    let all = flatten(calendars);
    let day: Vec<(u32, u32)> = all
        .iter()
        .filter(|b| b.date == date)
        .map(BusyInterval::range)
        .collect();

    merge_intervals(day)
        .into_iter()
        .map(|(start, end)| {
            let source_count = calendars
                .iter()
                .filter(|calendar| {
                    calendar
                        .busy
                        .iter()
                        .any(|b| b.date == date && b.start_minute < end && b.end_minute > start)
                })
                .count();
            BusyBlock {
                date,
                start_minute: start,
                end_minute: end,
                source_count,
            }
        })
        .collect()
}

/// Busy blocks for every date in the window starting today, weekends included.
pub fn busy_blocks_in_window<C: Clock + ?Sized>(
    calendars: &[CalendarBusy],
    days: u32,
    clock: &C,
) -> Vec<BusyBlock> {
    freebusy::day_window(clock::today(clock), days)
        .flat_map(|date| busy_blocks_on(calendars, date))
        .collect()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalendar {
    calendar_id: String,
    busy: Vec<RawBusySlot>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBusyInput {
    Flat(Vec<RawBusySlot>),
    Grouped(Vec<RawCalendar>),
}

fn convert(slots: &[RawBusySlot]) -> Result<Vec<BusyInterval>> {
    slots.iter().map(BusyInterval::try_from).collect()
}

/// Parse busy input JSON.
///
/// Accepts either a flat array of `{startDate, startTime, endTime}` objects,
/// returned as one calendar named [`UNGROUPED_CALENDAR_ID`], or an array of
/// `{calendarId, busy: [...]}` groups.
///
/// # Errors
/// Returns `SlotError::Json` if the document matches neither shape, or the
/// conversion error of the first malformed slot.
pub fn parse_busy_json(json: &str) -> Result<Vec<CalendarBusy>> {
    match serde_json::from_str::<RawBusyInput>(json)? {
        RawBusyInput::Flat(slots) => Ok(vec![CalendarBusy {
            calendar_id: UNGROUPED_CALENDAR_ID.to_string(),
            busy: convert(&slots)?,
        }]),
        RawBusyInput::Grouped(calendars) => calendars
            .iter()
            .map(|c| {
                Ok(CalendarBusy {
                    calendar_id: c.calendar_id.clone(),
                    busy: convert(&c.busy)?,
                })
            })
            .collect(),
    }
}
