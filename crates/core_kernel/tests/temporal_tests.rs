//! Integration tests for calendar-day arithmetic

use chrono::NaiveDate;
use core_kernel::temporal::{is_weekend, last_day_of_month, previous_month, DateRange};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn date_range_serializes_as_iso_dates() {
    let range = DateRange::new(date(2024, 1, 16), date(2024, 1, 31)).unwrap();
    let json = serde_json::to_string(&range).unwrap();
    assert_eq!(json, r#"{"start":"2024-01-16","end":"2024-01-31"}"#);
}

#[test]
fn every_month_has_a_valid_last_day() {
    for year in [1999, 2000, 2023, 2024, 2100] {
        for month in 1..=12 {
            let last = last_day_of_month(year, month);
            let first = date(year, month, 1);
            let range = DateRange::new(first, last).unwrap();
            assert!(range.day_count() >= 28 && range.day_count() <= 31);
        }
    }
}

#[test]
fn previous_month_chain_covers_a_year() {
    let mut cursor = (2024, 12);
    for _ in 0..12 {
        cursor = previous_month(cursor.0, cursor.1);
    }
    assert_eq!(cursor, (2023, 12));
}

#[test]
fn weekend_pattern_over_one_week() {
    // 2024-01-01 is a Monday
    let flags: Vec<bool> = DateRange::new(date(2024, 1, 1), date(2024, 1, 7))
        .unwrap()
        .iter_days()
        .map(is_weekend)
        .collect();
    assert_eq!(flags, vec![false, false, false, false, false, true, true]);
}
