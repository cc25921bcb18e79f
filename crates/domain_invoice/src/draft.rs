//! The invoice draft and its finalized snapshot
//!
//! `InvoiceDraft` keeps its fields private and funnels every change
//! through mutators that re-derive the totals before returning. There is
//! no dirty flag and no deferred recompute: after any mutator, `totals()`
//! reflects the schedule, line items, and rates exactly.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, InvoiceId, LineItemId, Money, Rate};
use domain_period::WorkDay;

use crate::error::InvoiceError;
use crate::line_item::LineItem;
use crate::party::Party;
use crate::totals::{compute_totals, InvoiceTotals};

/// The single in-progress invoice being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    id: InvoiceId,
    invoice_number: String,
    from: Party,
    to: Party,
    period_start: NaiveDate,
    period_end: NaiveDate,
    /// Sorted by date; at most one entry per date
    schedule: Vec<WorkDay>,
    line_items: Vec<LineItem>,
    hourly_rate: Money,
    discount: Rate,
    tax: Rate,
    notes: Option<String>,
    totals: InvoiceTotals,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InvoiceDraft {
    /// Creates an empty draft for a billing period
    ///
    /// The schedule starts empty; callers generate one (typically via the
    /// period engine) and hand it over with [`replace_schedule`].
    ///
    /// [`replace_schedule`]: InvoiceDraft::replace_schedule
    pub fn new(period_start: NaiveDate, period_end: NaiveDate, hourly_rate: Money) -> Self {
        let now = Utc::now();
        let currency = hourly_rate.currency();

        Self {
            id: InvoiceId::new_v7(),
            invoice_number: String::new(),
            from: Party::empty(),
            to: Party::empty(),
            period_start,
            period_end,
            schedule: Vec::new(),
            line_items: Vec::new(),
            hourly_rate,
            discount: Rate::zero(),
            tax: Rate::zero(),
            notes: None,
            totals: InvoiceTotals::zero(currency),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the schedule wholesale, builder-style
    pub fn with_schedule(mut self, schedule: Vec<WorkDay>) -> Self {
        self.replace_schedule(schedule);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn id(&self) -> InvoiceId {
        self.id
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn from_party(&self) -> &Party {
        &self.from
    }

    pub fn to_party(&self) -> &Party {
        &self.to
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }

    pub fn schedule(&self) -> &[WorkDay] {
        &self.schedule
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn hourly_rate(&self) -> Money {
        self.hourly_rate
    }

    pub fn discount(&self) -> Rate {
        self.discount
    }

    pub fn tax(&self) -> Rate {
        self.tax
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn currency(&self) -> Currency {
        self.hourly_rate.currency()
    }

    /// The derived totals, always consistent with the fields above
    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ------------------------------------------------------------------
    // Header mutators
    // ------------------------------------------------------------------

    /// Sets the human-readable invoice number
    pub fn set_invoice_number(&mut self, number: impl Into<String>) {
        self.invoice_number = number.into();
        self.touch();
    }

    /// Sets the issuing party
    pub fn set_from(&mut self, party: Party) {
        self.from = party;
        self.touch();
    }

    /// Sets the billed party
    pub fn set_to(&mut self, party: Party) {
        self.to = party;
        self.touch();
    }

    /// Sets the free-form notes
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
        self.touch();
    }

    /// Moves the draft to a different billing period
    ///
    /// The schedule is not regenerated here; callers decide whether to
    /// keep, merge, or replace the existing days.
    pub fn set_period(&mut self, start: NaiveDate, end: NaiveDate) {
        self.period_start = start;
        self.period_end = end;
        self.touch();
    }

    // ------------------------------------------------------------------
    // Rate mutators (each re-derives the totals)
    // ------------------------------------------------------------------

    /// Sets the hourly rate and recomputes totals
    pub fn set_hourly_rate(&mut self, rate: Money) {
        self.hourly_rate = rate;
        self.recalculate();
    }

    /// Sets the discount percentage and recomputes totals
    pub fn set_discount(&mut self, discount: Rate) {
        self.discount = discount;
        self.recalculate();
    }

    /// Sets the tax percentage and recomputes totals
    pub fn set_tax(&mut self, tax: Rate) {
        self.tax = tax;
        self.recalculate();
    }

    // ------------------------------------------------------------------
    // Schedule mutators (each re-derives the totals)
    // ------------------------------------------------------------------

    /// Replaces the entire work schedule
    pub fn replace_schedule(&mut self, mut schedule: Vec<WorkDay>) {
        schedule.sort_by_key(|d| d.date);
        schedule.dedup_by_key(|d| d.date);
        self.schedule = schedule;
        self.recalculate();
    }

    /// Writes hours (and notes) for a date - upsert by date
    ///
    /// An existing day keeps its inclusion flag and gets new hours/notes;
    /// a new day is inserted in date order with the default weekend rule.
    /// Writing the same date twice never duplicates the entry.
    pub fn upsert_day(&mut self, date: NaiveDate, hours: Decimal, notes: Option<String>) {
        match self.schedule.iter_mut().find(|d| d.date == date) {
            Some(existing) => {
                existing.hours = hours;
                existing.notes = notes;
            }
            None => {
                let mut day = WorkDay::new(date, hours);
                day.notes = notes;
                let position = self
                    .schedule
                    .iter()
                    .position(|d| d.date > date)
                    .unwrap_or(self.schedule.len());
                self.schedule.insert(position, day);
            }
        }
        self.recalculate();
    }

    /// Toggles whether a scheduled day counts toward totals
    pub fn set_day_included(&mut self, date: NaiveDate, included: bool) -> Result<(), InvoiceError> {
        let day = self
            .schedule
            .iter_mut()
            .find(|d| d.date == date)
            .ok_or(InvoiceError::DayNotFound(date))?;
        day.is_included = included;
        self.recalculate();
        Ok(())
    }

    /// Removes a day from the schedule
    pub fn remove_day(&mut self, date: NaiveDate) -> Result<(), InvoiceError> {
        let position = self
            .schedule
            .iter()
            .position(|d| d.date == date)
            .ok_or(InvoiceError::DayNotFound(date))?;
        self.schedule.remove(position);
        self.recalculate();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Line-item mutators (each re-derives the totals)
    // ------------------------------------------------------------------

    /// Appends a line item and returns its id
    pub fn add_line_item(&mut self, item: LineItem) -> LineItemId {
        let id = item.id();
        self.line_items.push(item);
        self.recalculate();
        id
    }

    /// Updates a line item's quantity; the item re-derives its amount
    pub fn set_line_item_quantity(
        &mut self,
        id: LineItemId,
        quantity: Decimal,
    ) -> Result<(), InvoiceError> {
        self.line_item_mut(id)?.set_quantity(quantity);
        self.recalculate();
        Ok(())
    }

    /// Updates a line item's unit price; the item re-derives its amount
    pub fn set_line_item_unit_price(
        &mut self,
        id: LineItemId,
        unit_price: Money,
    ) -> Result<(), InvoiceError> {
        self.line_item_mut(id)?.set_unit_price(unit_price);
        self.recalculate();
        Ok(())
    }

    /// Updates a line item's description
    pub fn set_line_item_description(
        &mut self,
        id: LineItemId,
        description: impl Into<String>,
    ) -> Result<(), InvoiceError> {
        self.line_item_mut(id)?.set_description(description);
        self.touch();
        Ok(())
    }

    /// Removes a line item
    pub fn remove_line_item(&mut self, id: LineItemId) -> Result<(), InvoiceError> {
        let position = self
            .line_items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(InvoiceError::LineItemNotFound(id))?;
        self.line_items.remove(position);
        self.recalculate();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Finalization
    // ------------------------------------------------------------------

    /// Checks the draft carries everything a finalized invoice requires
    pub fn validate_for_finalize(&self) -> Result<(), InvoiceError> {
        if self.invoice_number.trim().is_empty() {
            return Err(InvoiceError::IncompleteDraft {
                field: "invoice number",
            });
        }
        if !self.from.has_name() {
            return Err(InvoiceError::IncompleteDraft {
                field: "issuer name",
            });
        }
        if !self.to.has_name() {
            return Err(InvoiceError::IncompleteDraft {
                field: "client name",
            });
        }
        Ok(())
    }

    /// Captures a finalized snapshot of the draft by value
    ///
    /// Rejects incomplete drafts and leaves the draft untouched either
    /// way, so a failed finalize can be corrected and resubmitted.
    pub fn finalize(&self) -> Result<FinalizedInvoice, InvoiceError> {
        self.validate_for_finalize()?;

        Ok(FinalizedInvoice {
            id: self.id,
            invoice_number: self.invoice_number.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            period_start: self.period_start,
            period_end: self.period_end,
            schedule: self.schedule.clone(),
            line_items: self.line_items.clone(),
            hourly_rate: self.hourly_rate,
            discount: self.discount,
            tax: self.tax,
            notes: self.notes.clone(),
            totals: self.totals.clone(),
            finalized_at: Utc::now(),
        })
    }

    fn line_item_mut(&mut self, id: LineItemId) -> Result<&mut LineItem, InvoiceError> {
        self.line_items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(InvoiceError::LineItemNotFound(id))
    }

    /// Re-derives the totals from the current inputs
    fn recalculate(&mut self) {
        self.totals = compute_totals(
            &self.schedule,
            &self.line_items,
            self.hourly_rate,
            self.discount,
            self.tax,
        );
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// An immutable, finalized invoice record
///
/// Captured by value from a draft at finalization; identity is the
/// invoice id, and re-finalizing the same draft produces a replacement
/// record under the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedInvoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub from: Party,
    pub to: Party,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub schedule: Vec<WorkDay>,
    pub line_items: Vec<LineItem>,
    pub hourly_rate: Money,
    pub discount: Rate,
    pub tax: Rate,
    pub notes: Option<String>,
    pub totals: InvoiceTotals,
    pub finalized_at: DateTime<Utc>,
}
