//! Invoice totals calculation
//!
//! One pure function derives every total an invoice shows. There is no
//! incremental update path: callers recompute from scratch on every edit,
//! which caps at a billing period's day count (~31) and eliminates
//! staleness bugs outright.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, Rate};
use domain_period::WorkDay;

use crate::line_item::LineItem;

/// Fully derived invoice totals
///
/// Never mutated independently; always replaced wholesale by
/// [`compute_totals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Number of days that count toward billing
    pub total_days: u32,
    /// Sum of hours across counting days
    pub total_hours: Decimal,
    /// Hourly earnings plus line-item amounts
    pub subtotal: Money,
    /// Discount taken off the subtotal
    pub discount_amount: Money,
    /// Tax on the post-discount amount
    pub tax_amount: Money,
    /// Grand total: subtotal - discount + tax
    pub total_amount: Money,
}

impl InvoiceTotals {
    /// All-zero totals in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            total_days: 0,
            total_hours: Decimal::ZERO,
            subtotal: Money::zero(currency),
            discount_amount: Money::zero(currency),
            tax_amount: Money::zero(currency),
            total_amount: Money::zero(currency),
        }
    }
}

/// Computes invoice totals from a work schedule, line items, and rates
///
/// The order of operations is fixed:
///
/// 1. A day counts only when `is_included` AND `hours > 0`; an included
///    day with zero hours sits on the calendar without inflating totals.
/// 2. `subtotal = total_hours * hourly_rate + sum(line_item.amount)`.
/// 3. Discount applies to the subtotal.
/// 4. Tax applies to the amount *after* discount, not the raw subtotal.
///
/// No rounding happens here; display rounding belongs to the caller.
/// Inputs are assumed validated upstream (non-negative rates, hours within
/// bounds, line items in the invoice currency); this function neither
/// clamps nor rejects. Empty inputs yield all-zero totals.
pub fn compute_totals(
    schedule: &[WorkDay],
    line_items: &[LineItem],
    hourly_rate: Money,
    discount: Rate,
    tax: Rate,
) -> InvoiceTotals {
    let currency = hourly_rate.currency();

    let mut total_days: u32 = 0;
    let mut total_hours = Decimal::ZERO;
    for day in schedule.iter().filter(|d| d.counts_toward_totals()) {
        total_days += 1;
        total_hours += day.hours;
    }

    let hourly_subtotal = hourly_rate.multiply(total_hours);
    let line_items_total = line_items
        .iter()
        .fold(Money::zero(currency), |acc, item| acc + item.amount());

    let subtotal = hourly_subtotal + line_items_total;
    let discount_amount = discount.apply(&subtotal);
    let after_discount = subtotal - discount_amount;
    let tax_amount = tax.apply(&after_discount);
    let total_amount = after_discount + tax_amount;

    InvoiceTotals {
        total_days,
        total_hours,
        subtotal,
        discount_amount,
        tax_amount,
        total_amount,
    }
}
