//! Period Domain - Billing-Period Detection and Work Schedules
//!
//! This crate implements the pure calendar rules of the billing cycle:
//! mapping a reference date and a recurrence policy onto a concrete
//! half-month or whole-month billing period, and expanding a period into
//! the per-day work schedule an invoice is built from.
//!
//! Everything here is a pure function of its inputs. "Today" is always an
//! explicit argument, never read from a clock, so every rule is
//! deterministic and directly testable.
//!
//! # Half-month billing
//!
//! The cadence follows the common semi-monthly payroll convention: the
//! first batch runs the 1st through the 15th, the second batch the 16th
//! through the month's actual last day (leap years included).
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_period::{detect, RecurrenceFrequency};
//!
//! let period = detect(RecurrenceFrequency::Both15thAndLast, today);
//! let schedule = generate_schedule(period.start, period.end, dec!(8));
//! ```

pub mod policy;
pub mod period;
pub mod schedule;

pub use policy::{RecurrenceFrequency, BatchSelector, DayInclusionPolicy};
pub use period::{BillingPeriod, detect, for_batch, period_options};
pub use schedule::{WorkDay, generate_schedule, filter_days};
