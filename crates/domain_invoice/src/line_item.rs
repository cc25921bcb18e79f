//! Invoice line items
//!
//! A line item's `amount` is a derived cache: it is recomputed from
//! quantity and unit price on every change and can never be set directly.
//! Fields stay private so the invariant holds by construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{LineItemId, Money};

/// A free-form billable line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    description: String,
    quantity: Decimal,
    unit_price: Money,
    /// Always `quantity * unit_price`; cached, never authoritative
    amount: Money,
}

impl LineItem {
    /// Creates a new line item; the amount is derived immediately
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Money) -> Self {
        Self {
            id: LineItemId::new_v7(),
            description: description.into(),
            quantity,
            unit_price,
            amount: unit_price.multiply(quantity),
        }
    }

    pub fn id(&self) -> LineItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// The derived amount, `quantity * unit_price`
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Updates the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Updates the quantity and re-derives the amount
    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.recompute_amount();
    }

    /// Updates the unit price and re-derives the amount
    pub fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price;
        self.recompute_amount();
    }

    fn recompute_amount(&mut self) {
        self.amount = self.unit_price.multiply(self.quantity);
    }
}
