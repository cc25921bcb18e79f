//! Billing-period detection and selection
//!
//! Maps a reference date plus a recurrence policy onto a concrete billing
//! period, or an explicit batch selection onto its fixed range. Detection is
//! "today-driven": given the day of the month, it infers which half-month
//! has most recently closed and is therefore ready to bill.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{first_day_of_month, last_day_of_month, previous_month, DateRange};

use crate::policy::{BatchSelector, RecurrenceFrequency};

/// A concrete billing period: an inclusive date range plus its display label
///
/// Constructed fresh on every detection or selection call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// Last day of the period (inclusive)
    pub end: NaiveDate,
    /// Human-readable label, e.g. "1st–15th Jan 2024"
    pub label: String,
    /// True when the period was inferred from a recurrence policy rather
    /// than picked explicitly by the user
    pub auto_detected: bool,
}

impl BillingPeriod {
    /// Returns the period as a validated date range
    pub fn date_range(&self) -> DateRange {
        // start <= end by construction for every period this module builds
        DateRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns true if the given day falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Detects the billing period that is ready to invoice as of `today`
///
/// The rule, per frequency (`d` = day-of-month of `today`):
///
/// - `Both15thAndLast`: `d >= 16` bills the current month's first half;
///   `d <= 15` bills the *previous* month's second half (January wraps to
///   the prior December).
/// - `Every15th`: always a 1st–15th range; the current month's once the
///   15th has passed (`d > 15`), otherwise the previous month's.
/// - `EveryLastDay`: always a 16th–last-day range; the current month's from
///   the 16th on, otherwise the previous month's.
/// - `Custom`: explicit fallback to the full current month. This arm also
///   covers any cadence the detector has no rule for; it is a documented
///   default, not a silent catch-all.
///
/// Every detected period has `auto_detected = true`.
pub fn detect(frequency: RecurrenceFrequency, today: NaiveDate) -> BillingPeriod {
    let (year, month, day) = (today.year(), today.month(), today.day());

    match frequency {
        RecurrenceFrequency::Both15thAndLast => {
            if day >= 16 {
                first_half(year, month, true)
            } else {
                let (py, pm) = previous_month(year, month);
                second_half(py, pm, true)
            }
        }
        RecurrenceFrequency::Every15th => {
            if day > 15 {
                first_half(year, month, true)
            } else {
                let (py, pm) = previous_month(year, month);
                first_half(py, pm, true)
            }
        }
        RecurrenceFrequency::EveryLastDay => {
            if day >= 16 {
                second_half(year, month, true)
            } else {
                let (py, pm) = previous_month(year, month);
                second_half(py, pm, true)
            }
        }
        RecurrenceFrequency::Custom => full_month(year, month, true),
    }
}

/// Returns the fixed period for an explicit batch selection
///
/// Always `auto_detected = false`; the reference date only supplies the
/// month and year.
pub fn for_batch(batch: BatchSelector, reference: NaiveDate) -> BillingPeriod {
    let (year, month) = (reference.year(), reference.month());
    let month_abbrev = reference.format("%b");

    match batch {
        BatchSelector::FirstBatch => {
            let mut period = first_half(year, month, false);
            period.label = format!("1st Batch (1–15 {month_abbrev})");
            period
        }
        BatchSelector::SecondBatch => {
            let mut period = second_half(year, month, false);
            period.label = format!(
                "2nd Batch (16–{} {month_abbrev})",
                period.end.day()
            );
            period
        }
        BatchSelector::WholeMonth => {
            let mut period = full_month(year, month, false);
            period.label = format!("Whole Month ({})", reference.format("%B"));
            period
        }
    }
}

/// Enumerates the selectable period options around a reference date
///
/// Always six entries, in this exact order: current month 1–15, current
/// month 16–end, previous month 1–15, previous month 16–end, full current
/// month, full previous month. The order is part of the contract - it
/// drives a manual-override picker.
pub fn period_options(reference: NaiveDate) -> Vec<BillingPeriod> {
    let (year, month) = (reference.year(), reference.month());
    let (prev_year, prev_month) = previous_month(year, month);

    vec![
        first_half(year, month, false),
        second_half(year, month, false),
        first_half(prev_year, prev_month, false),
        second_half(prev_year, prev_month, false),
        full_month(year, month, false),
        full_month(prev_year, prev_month, false),
    ]
}

/// English ordinal suffix: 11th/12th/13th override the last-digit rule
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11 | 12 | 13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn first_half(year: i32, month: u32, auto_detected: bool) -> BillingPeriod {
    let start = first_day_of_month(year, month);
    let end = start.with_day(15).expect("every month has a 15th");
    BillingPeriod {
        start,
        end,
        label: format!("1st–15th {}", start.format("%b %Y")),
        auto_detected,
    }
}

fn second_half(year: i32, month: u32, auto_detected: bool) -> BillingPeriod {
    let end = last_day_of_month(year, month);
    let start = end.with_day(16).expect("every month has a 16th");
    let last = end.day();
    BillingPeriod {
        start,
        end,
        label: format!("16th–{last}{} {}", ordinal_suffix(last), start.format("%b %Y")),
        auto_detected,
    }
}

fn full_month(year: i32, month: u32, auto_detected: bool) -> BillingPeriod {
    let start = first_day_of_month(year, month);
    let end = last_day_of_month(year, month);
    BillingPeriod {
        start,
        end,
        label: format!("Full {}", start.format("%B %Y")),
        auto_detected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordinal_suffix_teen_override() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
    }

    #[test]
    fn test_ordinal_suffix_last_digit() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(30), "th");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn test_detect_is_auto_detected() {
        let period = detect(RecurrenceFrequency::Every15th, date(2024, 3, 20));
        assert!(period.auto_detected);
    }

    #[test]
    fn test_custom_frequency_falls_back_to_full_month() {
        let period = detect(RecurrenceFrequency::Custom, date(2024, 3, 20));
        assert_eq!(period.start, date(2024, 3, 1));
        assert_eq!(period.end, date(2024, 3, 31));
        assert_eq!(period.label, "Full March 2024");
        assert!(period.auto_detected);
    }

    #[test]
    fn test_period_contains() {
        let period = for_batch(BatchSelector::FirstBatch, date(2024, 3, 20));
        assert!(period.contains(date(2024, 3, 1)));
        assert!(period.contains(date(2024, 3, 15)));
        assert!(!period.contains(date(2024, 3, 16)));
    }
}
