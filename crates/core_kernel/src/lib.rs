//! Core Kernel - Foundational types and utilities for timebill
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar-day temporal types for billing periods
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Money, Currency, Rate, MoneyError};
pub use temporal::{DateRange, TemporalError};
pub use identifiers::{InvoiceId, LineItemId, ProfileId};
