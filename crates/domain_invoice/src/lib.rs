//! Invoice Domain - Totals Calculation and the Invoice Draft
//!
//! This crate owns the financial arithmetic of an invoice and the draft
//! entity it runs against.
//!
//! # Totals invariant
//!
//! `InvoiceTotals` is a fully derived value: it is recomputed in full from
//! the work schedule, line items, hourly rate, discount, and tax on every
//! mutation, never patched incrementally. `InvoiceDraft` enforces this by
//! keeping its fields private; every mutator re-derives the totals before
//! returning, so a draft's totals are consistent with its inputs at every
//! observable point.
//!
//! # Order of operations
//!
//! Discount applies to the subtotal; tax applies to the *post-discount*
//! amount. With a 10% discount and 10% tax on a 1000 subtotal the tax is
//! 90, not 100. This ordering is a user-visible business rule.

pub mod totals;
pub mod line_item;
pub mod party;
pub mod draft;
pub mod error;

pub use totals::{InvoiceTotals, compute_totals};
pub use line_item::LineItem;
pub use party::Party;
pub use draft::{InvoiceDraft, FinalizedInvoice};
pub use error::InvoiceError;
