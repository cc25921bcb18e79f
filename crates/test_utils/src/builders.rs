//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_invoice::{InvoiceDraft, LineItem, Party};
use domain_period::{generate_schedule, WorkDay};

use crate::fixtures::{MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for a single work day
pub struct WorkDayBuilder {
    date: NaiveDate,
    hours: Decimal,
    included: Option<bool>,
    notes: Option<String>,
}

impl Default for WorkDayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkDayBuilder {
    /// Creates a builder defaulting to a weekday with 8 hours
    pub fn new() -> Self {
        Self {
            date: TemporalFixtures::monday(),
            hours: dec!(8),
            included: None,
            notes: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn hours(mut self, hours: Decimal) -> Self {
        self.hours = hours;
        self
    }

    pub fn included(mut self, included: bool) -> Self {
        self.included = Some(included);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> WorkDay {
        let mut day = WorkDay::new(self.date, self.hours);
        if let Some(included) = self.included {
            day.is_included = included;
        }
        day.notes = self.notes;
        day
    }
}

/// Builder for a complete, finalizable invoice draft
pub struct DraftBuilder {
    period_start: NaiveDate,
    period_end: NaiveDate,
    hourly_rate: Money,
    invoice_number: String,
    from: Party,
    to: Party,
    with_schedule: bool,
    line_items: Vec<LineItem>,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftBuilder {
    /// Creates a builder for a January 2024 first-half draft that passes
    /// finalization validation out of the box
    pub fn new() -> Self {
        Self {
            period_start: TemporalFixtures::jan_first(),
            period_end: TemporalFixtures::jan_fifteenth(),
            hourly_rate: MoneyFixtures::hourly_rate(),
            invoice_number: StringFixtures::invoice_number().to_string(),
            from: Party::new(StringFixtures::issuer_name()),
            to: Party::new(StringFixtures::client_name()),
            with_schedule: true,
            line_items: Vec::new(),
        }
    }

    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period_start = start;
        self.period_end = end;
        self
    }

    pub fn hourly_rate(mut self, rate: Money) -> Self {
        self.hourly_rate = rate;
        self
    }

    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = number.into();
        self
    }

    pub fn from_party(mut self, party: Party) -> Self {
        self.from = party;
        self
    }

    pub fn to_party(mut self, party: Party) -> Self {
        self.to = party;
        self
    }

    /// Skips the default generated schedule, leaving it empty
    pub fn without_schedule(mut self) -> Self {
        self.with_schedule = false;
        self
    }

    pub fn line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    pub fn build(self) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new(self.period_start, self.period_end, self.hourly_rate);
        if self.with_schedule {
            draft.replace_schedule(generate_schedule(
                self.period_start,
                self.period_end,
                dec!(8),
            ));
        }
        draft.set_invoice_number(self.invoice_number);
        draft.set_from(self.from);
        draft.set_to(self.to);
        for item in self.line_items {
            draft.add_line_item(item);
        }
        draft
    }
}
