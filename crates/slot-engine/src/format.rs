//! Render free slots as the chat message shared with the team.
//!
//! ```text
//! 【全員の空き時間】
//! 2/2(月) 10:00-12:00, 14:00-19:00
//! 2/3(火) 10:00-19:00
//!
//! ご都合いかがでしょうか？
//! ```

use chrono::{Datelike, NaiveDate};

use crate::freebusy::FreeSlot;

/// First line of a non-empty result.
pub const HEADER: &str = "【全員の空き時間】";
/// Last line of a non-empty result.
pub const CLOSING: &str = "ご都合いかがでしょうか？";
/// The whole message when nothing qualifies.
pub const NO_AVAILABILITY: &str = "今週は空きがないようです。お忙しいですね！";

/// Weekday labels indexed by days from Sunday.
const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Single-character weekday label for `date`.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// `{month}/{day}({weekday})` without zero padding.
pub fn date_label(date: NaiveDate) -> String {
    format!("{}/{}({})", date.month(), date.day(), weekday_label(date))
}

/// Group slots by date, keeping dates in the order they first appear.
///
/// Upstream extraction already emits dates in ascending order; grouping does
/// not re-sort.
pub fn group_by_date(slots: &[FreeSlot]) -> Vec<(NaiveDate, Vec<&FreeSlot>)> {
    let mut groups: Vec<(NaiveDate, Vec<&FreeSlot>)> = Vec::new();
    for slot in slots {
        match groups.iter_mut().find(|(date, _)| *date == slot.date) {
            Some((_, day)) => day.push(slot),
            None => groups.push((slot.date, vec![slot])),
        }
    }
    groups
}

/// Render the free-time message.
///
/// Returns [`NO_AVAILABILITY`] for an empty list.
pub fn render_free_slots(slots: &[FreeSlot]) -> String {
    if slots.is_empty() {
        return NO_AVAILABILITY.to_string();
    }

    let mut lines = vec![HEADER.to_string()];
    for (date, day_slots) in group_by_date(slots) {
        let times = day_slots
            .iter()
            .map(|s| format!("{}-{}", s.start_time(), s.end_time()))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("{} {}", date_label(date), times));
    }
    lines.push(String::new());
    lines.push(CLOSING.to_string());

    lines.join("\n")
}
