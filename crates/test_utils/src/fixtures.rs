//! Pre-built test data for common entities

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

/// Calendar fixtures anchored in January 2024 (a leap year)
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// 2024-01-01, a Monday
    pub fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// 2024-01-15
    pub fn jan_fifteenth() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// 2024-01-05, a Friday
    pub fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    /// 2024-01-08, the following Monday
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
    }
}

/// Money fixtures in USD
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical hourly rate: $100.00
    pub fn hourly_rate() -> Money {
        Money::new(dec!(100), Currency::USD)
    }

    /// A round line-item price: $50.00
    pub fn unit_price() -> Money {
        Money::new(dec!(50), Currency::USD)
    }
}

/// String fixtures for invoice headers
pub struct StringFixtures;

impl StringFixtures {
    pub fn invoice_number() -> &'static str {
        "2024-001"
    }

    pub fn issuer_name() -> &'static str {
        "Jane Doe"
    }

    pub fn client_name() -> &'static str {
        "Acme Corp"
    }
}
