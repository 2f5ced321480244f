//! Property-based tests for merging and free-slot extraction using proptest.
//!
//! These check invariants that should hold for *any* busy input, not just the
//! examples in `merge_tests.rs` and `freebusy_tests.rs`.

use chrono::NaiveDate;
use proptest::prelude::*;
use slot_engine::busy::BusyInterval;
use slot_engine::freebusy::{find_free_slots_on, BusinessHours, MIN_SLOT_MINUTES, WORK_END, WORK_START};
use slot_engine::merge::merge_intervals;
use slot_engine::time::{format_time, parse_time, MINUTES_PER_DAY};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A non-empty range anywhere in the day.
fn arb_range() -> impl Strategy<Value = (u32, u32)> {
    (0u32..MINUTES_PER_DAY)
        .prop_flat_map(|start| (Just(start), (start + 1)..=MINUTES_PER_DAY))
}

fn arb_ranges() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec(arb_range(), 0..12)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
}

/// Minutes of the day covered by any range.
fn coverage(ranges: &[(u32, u32)]) -> Vec<bool> {
    let mut covered = vec![false; MINUTES_PER_DAY as usize];
    for &(start, end) in ranges {
        for minute in start..end {
            covered[minute as usize] = true;
        }
    }
    covered
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn time_codec_round_trips(minute in 0u32..MINUTES_PER_DAY) {
        prop_assert_eq!(parse_time(&format_time(minute)).unwrap(), minute);
    }

    #[test]
    fn merged_ranges_are_sorted_and_separated(ranges in arb_ranges()) {
        let merged = merge_intervals(ranges);
        for pair in merged.windows(2) {
            // Strict: touching ranges would have been merged.
            prop_assert!(pair[0].1 < pair[1].0, "not separated: {:?}", pair);
        }
        for &(start, end) in &merged {
            prop_assert!(start < end);
        }
    }

    #[test]
    fn merge_preserves_coverage(ranges in arb_ranges()) {
        let merged = merge_intervals(ranges.clone());
        prop_assert_eq!(coverage(&merged), coverage(&ranges));
    }

    #[test]
    fn free_slots_respect_hours_minimum_and_busy(ranges in arb_ranges()) {
        let busy: Vec<BusyInterval> = ranges
            .iter()
            .map(|&(s, e)| BusyInterval::new(monday(), s, e).unwrap())
            .collect();

        let slots = find_free_slots_on(monday(), &busy, &BusinessHours::DEFAULT);
        let busy_minutes = coverage(&ranges);

        for slot in &slots {
            prop_assert_eq!(slot.date, monday());
            prop_assert!(slot.start_minute >= WORK_START);
            prop_assert!(slot.end_minute <= WORK_END);
            prop_assert!(slot.duration_minutes() >= MIN_SLOT_MINUTES);
            for minute in slot.start_minute..slot.end_minute {
                prop_assert!(!busy_minutes[minute as usize], "slot {:?} overlaps busy minute {}", slot, minute);
            }
        }
        for pair in slots.windows(2) {
            prop_assert!(pair[0].end_minute < pair[1].start_minute);
        }
    }

    #[test]
    fn input_order_does_not_matter(ranges in arb_ranges()) {
        let forward: Vec<BusyInterval> = ranges
            .iter()
            .map(|&(s, e)| BusyInterval::new(monday(), s, e).unwrap())
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        prop_assert_eq!(
            find_free_slots_on(monday(), &forward, &BusinessHours::DEFAULT),
            find_free_slots_on(monday(), &backward, &BusinessHours::DEFAULT)
        );
    }
}
