//! Invoice parties
//!
//! A `Party` is one side of an invoice: the issuer ("from") or the client
//! ("to"). Saved parties double as reusable profile templates.

use serde::{Deserialize, Serialize};

use core_kernel::ProfileId;

/// A billing party: name plus optional contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Profile identifier (stable across template reuse)
    pub id: ProfileId,
    /// Display name; required before an invoice can be finalized
    pub name: String,
    /// Company or business name
    pub company: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
}

impl Party {
    /// Creates a party with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProfileId::new_v7(),
            name: name.into(),
            company: None,
            address: None,
            email: None,
            phone: None,
        }
    }

    /// An unnamed placeholder party, as drafts start out
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Sets the company name
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// True when the party has a usable display name
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
