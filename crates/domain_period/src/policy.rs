//! Billing-cycle policies
//!
//! Closed sum types for the three policy axes of the billing cycle. Keeping
//! these as enums (rather than strings) lets the compiler check every match
//! arm in the period engine.

use serde::{Deserialize, Serialize};

/// How often invoices are cut, i.e. which half-month boundaries bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceFrequency {
    /// Bill on the 15th of each month
    Every15th,
    /// Bill on the last day of each month
    EveryLastDay,
    /// Bill on both the 15th and the last day
    Both15thAndLast,
    /// No fixed cadence; detection falls back to the full current month
    Custom,
}

/// Explicit, user-driven period selection, independent of detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchSelector {
    /// 1st through the 15th
    FirstBatch,
    /// 16th through the last day of the month
    SecondBatch,
    /// 1st through the last day of the month
    WholeMonth,
}

/// Which calendar days within a range count as schedulable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayInclusionPolicy {
    /// Monday through Friday only
    WeekdaysOnly,
    /// Every calendar day
    AllDays,
    /// Only an explicitly supplied set of dates
    Custom,
}
