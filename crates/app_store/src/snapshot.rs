//! The persisted store snapshot
//!
//! One serializable blob holds everything that survives a session:
//! finalized invoices, the two profile lists, and the schedule
//! configuration. The in-progress draft is not part of the snapshot.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};
use domain_invoice::{FinalizedInvoice, Party};
use domain_period::{DayInclusionPolicy, RecurrenceFrequency};

/// Default schedule settings applied when starting a new draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Uniform hours pre-filled on every generated work day
    pub default_hours_per_day: Decimal,
    /// Hourly rate a new draft starts with
    pub default_hourly_rate: Money,
    /// Recurrence used by period auto-detection
    pub frequency: RecurrenceFrequency,
    /// Day-inclusion policy for schedule filtering
    pub day_policy: DayInclusionPolicy,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            default_hours_per_day: dec!(8),
            default_hourly_rate: Money::zero(Currency::USD),
            frequency: RecurrenceFrequency::Both15thAndLast,
            day_policy: DayInclusionPolicy::WeekdaysOnly,
        }
    }
}

/// The durable portion of the store's state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Finalized invoices, in finalization order
    #[serde(default)]
    pub invoices: Vec<FinalizedInvoice>,
    /// Reusable "from" party templates
    #[serde(default)]
    pub sender_profiles: Vec<Party>,
    /// Reusable "to" party templates
    #[serde(default)]
    pub recipient_profiles: Vec<Party>,
    /// Schedule defaults
    #[serde(default)]
    pub config: ScheduleConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.default_hours_per_day, dec!(8));
        assert_eq!(config.frequency, RecurrenceFrequency::Both15thAndLast);
        assert_eq!(config.day_policy, DayInclusionPolicy::WeekdaysOnly);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snapshot = StoreSnapshot {
            sender_profiles: vec![Party::new("Jane")],
            ..Default::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StoreSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_empty_blob_deserializes_with_defaults() {
        let back: StoreSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(back, StoreSnapshot::default());
    }
}
