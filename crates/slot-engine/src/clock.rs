//! Source of "now" for the day window.
//!
//! Searches always run against a single fixed UTC offset (`+09:00`). The clock
//! is injected so tests can pin the current instant.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Offset of the team's calendar day from UTC, in seconds.
pub const TARGET_OFFSET_SECS: i64 = 9 * 60 * 60;

/// Provides the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to midnight of `date` in the target offset.
    pub fn at_start_of(date: NaiveDate) -> Self {
        let local_midnight = date.and_time(NaiveTime::MIN).and_utc();
        Self(local_midnight - Duration::seconds(TARGET_OFFSET_SECS))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Today's calendar date in the target offset.
pub fn today<C: Clock + ?Sized>(clock: &C) -> NaiveDate {
    (clock.now() + Duration::seconds(TARGET_OFFSET_SECS)).date_naive()
}
