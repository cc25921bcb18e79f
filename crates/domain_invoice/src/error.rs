//! Invoice domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::LineItemId;

/// Errors that can occur in the invoice domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoiceError {
    /// The draft is missing a field required for finalization
    #[error("Cannot finalize draft: {field} is required")]
    IncompleteDraft { field: &'static str },

    /// Line item not found on the draft
    #[error("Line item not found: {0}")]
    LineItemNotFound(LineItemId),

    /// No work day scheduled on the given date
    #[error("No work day scheduled on {0}")]
    DayNotFound(NaiveDate),
}
