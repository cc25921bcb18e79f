//! Work schedules
//!
//! A schedule is the per-day expansion of a billing period: one `WorkDay`
//! row per calendar date. Weekend rows are generated but flagged excluded,
//! so the editing grid stays a complete seven-day-wide calendar while
//! weekend hours stay out of the default totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::temporal::is_weekend;

use crate::policy::DayInclusionPolicy;

/// One billable calendar day within a schedule
///
/// Identity is the date: a schedule holds at most one `WorkDay` per date,
/// and writes to an existing date replace its hours and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// The calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Hours worked; a display value until the day actually counts
    pub hours: Decimal,
    /// Whether the day participates in totals
    pub is_included: bool,
    /// Free-form note for the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkDay {
    /// Creates a work day with the default weekend rule: weekdays are
    /// included, Saturdays and Sundays are not
    pub fn new(date: NaiveDate, hours: Decimal) -> Self {
        Self {
            date,
            hours,
            is_included: !is_weekend(date),
            notes: None,
        }
    }

    /// Sets the inclusion flag
    pub fn with_included(mut self, included: bool) -> Self {
        self.is_included = included;
        self
    }

    /// Attaches a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True when this day contributes to totals: it must be included AND
    /// carry positive hours. A day can sit on the calendar, markable, with
    /// zero hours entered without inflating any total.
    pub fn counts_toward_totals(&self) -> bool {
        self.is_included && self.hours > Decimal::ZERO
    }
}

/// Generates the default work schedule for a period
///
/// Every calendar day from `start` to `end` inclusive gets a row with the
/// uniform `default_hours`, weekends pre-populated but excluded. An
/// inverted range yields an empty schedule.
pub fn generate_schedule(start: NaiveDate, end: NaiveDate, default_hours: Decimal) -> Vec<WorkDay> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| WorkDay::new(d, default_hours))
        .collect()
}

/// Filters the days of a range by an inclusion policy
///
/// - `AllDays`: every day in the range.
/// - `WeekdaysOnly`: Monday through Friday.
/// - `Custom`: only days present in both the range and `custom_dates`;
///   the result preserves range order, not the order of `custom_dates`.
pub fn filter_days(
    start: NaiveDate,
    end: NaiveDate,
    policy: DayInclusionPolicy,
    custom_dates: &[NaiveDate],
) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| match policy {
            DayInclusionPolicy::AllDays => true,
            DayInclusionPolicy::WeekdaysOnly => !is_weekend(*d),
            DayInclusionPolicy::Custom => custom_dates.contains(d),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_day_excluded_by_default() {
        let saturday = WorkDay::new(date(2024, 1, 6), dec!(8));
        assert!(!saturday.is_included);
        assert_eq!(saturday.hours, dec!(8));

        let monday = WorkDay::new(date(2024, 1, 8), dec!(8));
        assert!(monday.is_included);
    }

    #[test]
    fn test_zero_hours_never_counts() {
        let day = WorkDay::new(date(2024, 1, 8), Decimal::ZERO).with_included(true);
        assert!(!day.counts_toward_totals());
    }

    #[test]
    fn test_excluded_day_never_counts() {
        let day = WorkDay::new(date(2024, 1, 8), dec!(8)).with_included(false);
        assert!(!day.counts_toward_totals());
    }

    #[test]
    fn test_generate_schedule_inverted_range_is_empty() {
        let schedule = generate_schedule(date(2024, 1, 15), date(2024, 1, 1), dec!(8));
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_work_day_serializes_date_as_iso_string() {
        let day = WorkDay::new(date(2024, 1, 8), dec!(8));
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains(r#""date":"2024-01-08""#));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        })
    }

    proptest! {
        #[test]
        fn schedule_covers_every_day_exactly_once(
            start in arb_date(),
            span in 0u64..60
        ) {
            let end = start.checked_add_days(chrono::Days::new(span)).unwrap();
            let schedule = generate_schedule(start, end, dec!(8));

            prop_assert_eq!(schedule.len() as u64, span + 1);
            for pair in schedule.windows(2) {
                prop_assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
            }
        }

        #[test]
        fn weekday_filter_agrees_with_schedule_inclusion(
            start in arb_date(),
            span in 0u64..60
        ) {
            let end = start.checked_add_days(chrono::Days::new(span)).unwrap();
            let schedule = generate_schedule(start, end, dec!(8));
            let weekdays = filter_days(start, end, DayInclusionPolicy::WeekdaysOnly, &[]);

            let included: Vec<NaiveDate> = schedule
                .iter()
                .filter(|d| d.is_included)
                .map(|d| d.date)
                .collect();
            prop_assert_eq!(included, weekdays);
        }

        #[test]
        fn all_days_filter_returns_full_range(
            start in arb_date(),
            span in 0u64..60
        ) {
            let end = start.checked_add_days(chrono::Days::new(span)).unwrap();
            let days = filter_days(start, end, DayInclusionPolicy::AllDays, &[]);
            prop_assert_eq!(days.len() as u64, span + 1);
        }
    }
}
