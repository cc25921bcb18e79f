//! Store errors

use thiserror::Error;

use domain_invoice::InvoiceError;

use crate::storage::StorageError;

/// Errors that can occur in the invoice store
#[derive(Debug, Error)]
pub enum StoreError {
    /// An operation needed a draft but none is in progress
    #[error("No draft in progress")]
    NoDraft,

    /// The draft rejected the operation (e.g. incomplete at finalize)
    #[error(transparent)]
    Invoice(#[from] InvoiceError),

    /// Loading the snapshot failed at startup
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
