//! The invoice store
//!
//! A single mutable store instance owns the current draft, the finalized
//! invoices, the profile templates, and the schedule configuration. Draft
//! edits go through `InvoiceDraft`'s own mutators (reachable via
//! [`InvoiceStore::draft_mut`]), which keep the draft's totals fresh;
//! the store adds persistence and the finalize/upsert lifecycle on top.

use tracing::{debug, warn};

use core_kernel::InvoiceId;
use domain_invoice::{FinalizedInvoice, InvoiceDraft, Party};

use crate::error::StoreError;
use crate::snapshot::{ScheduleConfig, StoreSnapshot};
use crate::storage::SnapshotStore;

/// Stateful store for one draft plus the durable invoice data
pub struct InvoiceStore<S: SnapshotStore> {
    storage: S,
    draft: Option<InvoiceDraft>,
    invoices: Vec<FinalizedInvoice>,
    sender_profiles: Vec<Party>,
    recipient_profiles: Vec<Party>,
    config: ScheduleConfig,
}

impl<S: SnapshotStore> InvoiceStore<S> {
    /// Opens the store, loading any previously saved snapshot
    ///
    /// A load failure is surfaced rather than swallowed: starting from an
    /// implicitly empty store would silently discard saved invoices on the
    /// next save.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let snapshot = storage.load()?.unwrap_or_default();

        Ok(Self {
            storage,
            draft: None,
            invoices: snapshot.invoices,
            sender_profiles: snapshot.sender_profiles,
            recipient_profiles: snapshot.recipient_profiles,
            config: snapshot.config,
        })
    }

    // ------------------------------------------------------------------
    // Draft lifecycle
    // ------------------------------------------------------------------

    /// The in-progress draft, if any
    pub fn draft(&self) -> Option<&InvoiceDraft> {
        self.draft.as_ref()
    }

    /// Mutable access to the draft; all edits flow through the draft's
    /// own invariant-preserving mutators
    pub fn draft_mut(&mut self) -> Option<&mut InvoiceDraft> {
        self.draft.as_mut()
    }

    /// Starts editing the given draft, replacing any current one
    pub fn begin_draft(&mut self, draft: InvoiceDraft) -> &mut InvoiceDraft {
        debug!(invoice_id = %draft.id(), "beginning draft");
        self.draft.insert(draft)
    }

    /// Drops the in-progress draft without saving anything
    pub fn discard_draft(&mut self) {
        if let Some(draft) = self.draft.take() {
            debug!(invoice_id = %draft.id(), "discarded draft");
        }
    }

    /// Finalizes the current draft into the invoice list
    ///
    /// Upserts by invoice id: re-finalizing the same draft replaces its
    /// stored record instead of appending a duplicate. An incomplete
    /// draft is rejected and nothing changes. The draft stays in place
    /// for further edits and re-finalization.
    pub fn finalize_draft(&mut self) -> Result<InvoiceId, StoreError> {
        let draft = self.draft.as_ref().ok_or(StoreError::NoDraft)?;
        let finalized = draft.finalize()?;
        let id = finalized.id;

        match self.invoices.iter_mut().find(|inv| inv.id == id) {
            Some(existing) => *existing = finalized,
            None => self.invoices.push(finalized),
        }
        debug!(invoice_id = %id, "finalized draft");
        self.persist();
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Finalized invoices
    // ------------------------------------------------------------------

    pub fn invoices(&self) -> &[FinalizedInvoice] {
        &self.invoices
    }

    pub fn find_invoice(&self, id: InvoiceId) -> Option<&FinalizedInvoice> {
        self.invoices.iter().find(|inv| inv.id == id)
    }

    /// Removes a finalized invoice; returns true if one was removed
    pub fn remove_invoice(&mut self, id: InvoiceId) -> bool {
        let before = self.invoices.len();
        self.invoices.retain(|inv| inv.id != id);
        let removed = self.invoices.len() != before;
        if removed {
            debug!(invoice_id = %id, "removed invoice");
            self.persist();
        }
        removed
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    pub fn sender_profiles(&self) -> &[Party] {
        &self.sender_profiles
    }

    pub fn recipient_profiles(&self) -> &[Party] {
        &self.recipient_profiles
    }

    /// Saves a reusable "from" template, upserting by name
    pub fn save_sender_profile(&mut self, party: Party) {
        Self::upsert_profile(&mut self.sender_profiles, party);
        self.persist();
    }

    /// Saves a reusable "to" template, upserting by name
    pub fn save_recipient_profile(&mut self, party: Party) {
        Self::upsert_profile(&mut self.recipient_profiles, party);
        self.persist();
    }

    /// Removes a "from" template by name; returns true if one was removed
    pub fn remove_sender_profile(&mut self, name: &str) -> bool {
        let removed = Self::remove_profile(&mut self.sender_profiles, name);
        if removed {
            self.persist();
        }
        removed
    }

    /// Removes a "to" template by name; returns true if one was removed
    pub fn remove_recipient_profile(&mut self, name: &str) -> bool {
        let removed = Self::remove_profile(&mut self.recipient_profiles, name);
        if removed {
            self.persist();
        }
        removed
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScheduleConfig) {
        self.config = config;
        self.persist();
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Writes the durable state through the storage port
    ///
    /// Fire-and-forget: the in-memory mutation already succeeded, so a
    /// storage failure is logged and the call continues. The in-progress
    /// draft is never part of the snapshot.
    fn persist(&self) {
        let snapshot = StoreSnapshot {
            invoices: self.invoices.clone(),
            sender_profiles: self.sender_profiles.clone(),
            recipient_profiles: self.recipient_profiles.clone(),
            config: self.config.clone(),
        };
        if let Err(error) = self.storage.save(&snapshot) {
            warn!(%error, "failed to persist store snapshot");
        }
    }

    fn upsert_profile(profiles: &mut Vec<Party>, party: Party) {
        match profiles.iter_mut().find(|p| p.name == party.name) {
            Some(existing) => *existing = party,
            None => profiles.push(party),
        }
    }

    fn remove_profile(profiles: &mut Vec<Party>, name: &str) -> bool {
        let before = profiles.len();
        profiles.retain(|p| p.name != name);
        profiles.len() != before
    }
}
