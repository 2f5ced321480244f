//! # slot-engine
//!
//! Deterministic team free-time search over calendar busy intervals.
//!
//! Busy intervals from every participant are merged per day, and the gaps
//! inside business hours (weekdays, 10:00-19:00) that last at least an hour
//! become free slots. The result renders as a fixed-format chat message.
//!
//! ## Modules
//!
//! - [`time`] - `"HH:MM"` ↔ minute-of-day codec
//! - [`busy`] - Busy interval input types
//! - [`merge`] - Coalesce overlapping busy ranges
//! - [`freebusy`] - Free slots per day across the day window
//! - [`availability`] - Team-wide search across several calendars
//! - [`clock`] - Injectable "now" at the fixed +09:00 offset
//! - [`format`] - Chat message rendering
//! - [`command`] - Chat command parsing and replies
//! - [`error`] - Error types

pub mod availability;
pub mod busy;
pub mod clock;
pub mod command;
pub mod error;
pub mod format;
pub mod freebusy;
pub mod merge;
pub mod time;

pub use availability::{find_common_free_slots, parse_busy_json, CalendarBusy};
pub use busy::{BusyInterval, RawBusySlot};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{parse_command, Command};
pub use error::SlotError;
pub use format::render_free_slots;
pub use freebusy::{find_free_slots, BusinessHours, FreeSlot};
pub use merge::merge_intervals;
pub use time::{format_time, parse_time};
