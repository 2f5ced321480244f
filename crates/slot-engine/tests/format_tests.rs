//! Tests for chat message rendering.

use chrono::NaiveDate;
use slot_engine::format::{
    date_label, group_by_date, render_free_slots, weekday_label, CLOSING, HEADER, NO_AVAILABILITY,
};
use slot_engine::freebusy::FreeSlot;

fn slot(month: u32, day: u32, start: u32, end: u32) -> FreeSlot {
    FreeSlot {
        date: NaiveDate::from_ymd_opt(2026, month, day).unwrap(),
        start_minute: start,
        end_minute: end,
    }
}

#[test]
fn empty_list_renders_fixed_message() {
    assert_eq!(render_free_slots(&[]), "今週は空きがないようです。お忙しいですね！");
    assert_eq!(render_free_slots(&[]), NO_AVAILABILITY);
}

#[test]
fn single_day_with_two_slots() {
    let slots = vec![slot(2, 2, 600, 720), slot(2, 2, 840, 1140)];

    let text = render_free_slots(&slots);

    assert_eq!(
        text,
        "【全員の空き時間】\n2/2(月) 10:00-12:00, 14:00-19:00\n\nご都合いかがでしょうか？"
    );
}

#[test]
fn one_line_per_date() {
    let slots = vec![slot(2, 2, 600, 1140), slot(2, 3, 600, 1140)];

    let text = render_free_slots(&slots);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            HEADER,
            "2/2(月) 10:00-19:00",
            "2/3(火) 10:00-19:00",
            "",
            CLOSING,
        ]
    );
}

#[test]
fn dates_keep_first_seen_order() {
    let slots = vec![
        slot(2, 4, 600, 700),
        slot(2, 3, 600, 700),
        slot(2, 4, 800, 900),
    ];

    let groups = group_by_date(&slots);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0.to_string(), "2026-02-04");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0.to_string(), "2026-02-03");

    let text = render_free_slots(&slots);
    assert!(text.contains("2/4(水) 10:00-11:40, 13:20-15:00\n2/3(火) 10:00-11:40"));
}

#[test]
fn every_weekday_label() {
    // 2026-02-01 is a Sunday.
    let expected = ["日", "月", "火", "水", "木", "金", "土"];
    for (offset, label) in expected.iter().enumerate() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 1 + offset as u32).unwrap();
        assert_eq!(weekday_label(date), *label, "{date}");
    }
}

#[test]
fn date_label_is_not_zero_padded() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
    assert_eq!(date_label(date), "10/9(金)");
}
