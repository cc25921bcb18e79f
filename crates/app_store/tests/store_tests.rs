//! Comprehensive tests for the invoice store

use rust_decimal_macros::dec;

use app_store::{InMemoryStore, InvoiceStore, JsonFileStore, SnapshotStore, StoreError, StoreSnapshot};
use core_kernel::{Currency, Money, Rate};
use domain_invoice::{InvoiceError, LineItem, Party};
use test_utils::{DraftBuilder, MoneyFixtures, TemporalFixtures, WorkDayBuilder};

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

// ============================================================================
// Draft Lifecycle Tests
// ============================================================================

mod draft_tests {
    use super::*;

    #[test]
    fn test_open_empty_store() {
        let store = InvoiceStore::open(InMemoryStore::new()).unwrap();

        assert!(store.draft().is_none());
        assert!(store.invoices().is_empty());
        assert!(store.sender_profiles().is_empty());
    }

    #[test]
    fn test_draft_totals_stay_fresh_through_store_access() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        store.begin_draft(DraftBuilder::new().without_schedule().build());

        let draft = store.draft_mut().unwrap();
        draft.upsert_day(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            dec!(10),
            None,
        );
        draft.set_discount(Rate::from_percentage(dec!(10)));
        draft.set_tax(Rate::from_percentage(dec!(10)));

        let totals = store.draft().unwrap().totals();
        assert_eq!(totals.subtotal, usd(dec!(1000)));
        assert_eq!(totals.discount_amount, usd(dec!(100)));
        assert_eq!(totals.tax_amount, usd(dec!(90)));
        assert_eq!(totals.total_amount, usd(dec!(990)));
    }

    #[test]
    fn test_replaced_schedule_flows_into_totals() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        store.begin_draft(DraftBuilder::new().without_schedule().build());

        store.draft_mut().unwrap().replace_schedule(vec![
            WorkDayBuilder::new().on(TemporalFixtures::friday()).build(),
            WorkDayBuilder::new().hours(dec!(4)).build(),
            WorkDayBuilder::new()
                .on(TemporalFixtures::jan_fifteenth())
                .included(false)
                .build(),
        ]);

        // 8h Friday + 4h Monday; the excluded day contributes nothing
        let totals = store.draft().unwrap().totals();
        assert_eq!(totals.total_days, 2);
        assert_eq!(totals.total_hours, dec!(12));
        assert_eq!(totals.subtotal, usd(dec!(1200)));
    }

    #[test]
    fn test_discard_draft() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        store.begin_draft(DraftBuilder::new().build());
        store.discard_draft();

        assert!(store.draft().is_none());
    }
}

// ============================================================================
// Finalization Tests
// ============================================================================

mod finalize_tests {
    use super::*;

    #[test]
    fn test_finalize_without_draft() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        assert!(matches!(store.finalize_draft(), Err(StoreError::NoDraft)));
    }

    #[test]
    fn test_finalize_rejects_incomplete_draft_and_keeps_list_unchanged() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        store.begin_draft(DraftBuilder::new().to_party(Party::empty()).build());

        let result = store.finalize_draft();
        assert!(matches!(
            result,
            Err(StoreError::Invoice(InvoiceError::IncompleteDraft {
                field: "client name"
            }))
        ));
        assert!(store.invoices().is_empty());
        // The draft is untouched and available for correction
        assert!(store.draft().is_some());
    }

    #[test]
    fn test_finalize_appends_invoice() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        store.begin_draft(DraftBuilder::new().build());

        let id = store.finalize_draft().unwrap();

        assert_eq!(store.invoices().len(), 1);
        assert_eq!(store.find_invoice(id).unwrap().invoice_number, "2024-001");
    }

    #[test]
    fn test_refinalize_upserts_instead_of_appending() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        store.begin_draft(DraftBuilder::new().build());

        let first_id = store.finalize_draft().unwrap();

        // Keep editing the same draft, then finalize again
        store
            .draft_mut()
            .unwrap()
            .add_line_item(LineItem::new("Hosting", dec!(1), MoneyFixtures::unit_price()));
        let second_id = store.finalize_draft().unwrap();

        assert_eq!(first_id, second_id);
        assert_eq!(store.invoices().len(), 1);
        assert_eq!(store.invoices()[0].line_items.len(), 1);
    }

    #[test]
    fn test_remove_invoice() {
        let mut store = InvoiceStore::open(InMemoryStore::new()).unwrap();
        store.begin_draft(DraftBuilder::new().build());
        let id = store.finalize_draft().unwrap();

        assert!(store.remove_invoice(id));
        assert!(store.invoices().is_empty());
        assert!(!store.remove_invoice(id));
    }
}

// ============================================================================
// Persistence Tests
// ============================================================================

mod persistence_tests {
    use super::*;

    #[test]
    fn test_finalized_invoices_survive_reopen() {
        let storage = InMemoryStore::new();
        {
            let mut store = InvoiceStore::open(&storage).unwrap();
            store.begin_draft(DraftBuilder::new().build());
            store.finalize_draft().unwrap();
        }

        let reopened = InvoiceStore::open(&storage).unwrap();
        assert_eq!(reopened.invoices().len(), 1);
    }

    #[test]
    fn test_draft_is_excluded_from_snapshot() {
        let storage = InMemoryStore::new();
        let mut store = InvoiceStore::open(&storage).unwrap();

        store.begin_draft(DraftBuilder::new().build());
        // Trigger a persist through a durable mutation
        store.save_sender_profile(Party::new("Jane Doe"));

        let snapshot = storage.current().unwrap();
        assert_eq!(snapshot.sender_profiles.len(), 1);
        assert!(snapshot.invoices.is_empty());

        // Reopening yields no draft: it never persisted
        let reopened = InvoiceStore::open(&storage).unwrap();
        assert!(reopened.draft().is_none());
    }

    #[test]
    fn test_profile_upsert_by_name() {
        let storage = InMemoryStore::new();
        let mut store = InvoiceStore::open(&storage).unwrap();

        store.save_recipient_profile(Party::new("Acme Corp"));
        store.save_recipient_profile(Party::new("Acme Corp").with_email("ap@acme.test"));

        assert_eq!(store.recipient_profiles().len(), 1);
        assert_eq!(
            store.recipient_profiles()[0].email.as_deref(),
            Some("ap@acme.test")
        );
    }

    #[test]
    fn test_storage_failure_does_not_fail_the_mutation() {
        struct FailingStore;

        impl SnapshotStore for FailingStore {
            fn load(&self) -> Result<Option<StoreSnapshot>, app_store::StorageError> {
                Ok(None)
            }

            fn save(&self, _: &StoreSnapshot) -> Result<(), app_store::StorageError> {
                Err(app_store::StorageError::Io(std::io::Error::other("disk full")))
            }
        }

        let mut store = InvoiceStore::open(FailingStore).unwrap();
        store.begin_draft(DraftBuilder::new().build());

        // Fire-and-forget: the finalize itself still succeeds
        let id = store.finalize_draft().unwrap();
        assert!(store.find_invoice(id).is_some());
    }

    #[test]
    fn test_json_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        {
            let mut store = InvoiceStore::open(JsonFileStore::new(&path)).unwrap();
            store.begin_draft(DraftBuilder::new().build());
            store.finalize_draft().unwrap();
            store.save_sender_profile(Party::new("Jane Doe"));
        }

        let reopened = InvoiceStore::open(JsonFileStore::new(&path)).unwrap();
        assert_eq!(reopened.invoices().len(), 1);
        assert_eq!(reopened.sender_profiles().len(), 1);
    }

    #[test]
    fn test_json_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nothing.json"));
        assert!(store.load().unwrap().is_none());
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use super::*;
    use app_store::ScheduleConfig;
    use domain_period::{DayInclusionPolicy, RecurrenceFrequency};

    #[test]
    fn test_config_persists() {
        let storage = InMemoryStore::new();
        let mut store = InvoiceStore::open(&storage).unwrap();

        store.set_config(ScheduleConfig {
            default_hours_per_day: dec!(6),
            default_hourly_rate: usd(dec!(120)),
            frequency: RecurrenceFrequency::EveryLastDay,
            day_policy: DayInclusionPolicy::AllDays,
        });

        let reopened = InvoiceStore::open(&storage).unwrap();
        assert_eq!(reopened.config().default_hours_per_day, dec!(6));
        assert_eq!(reopened.config().frequency, RecurrenceFrequency::EveryLastDay);
    }
}
