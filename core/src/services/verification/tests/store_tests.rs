//! Tests for the in-memory verification store

use chrono::{Duration, Utc};

use crate::domain::entities::{CodeDigest, VerificationRecord};
use crate::services::verification::{InMemoryVerificationStore, VerificationStore};

fn record(email: &str) -> VerificationRecord {
    VerificationRecord::first_issue(
        CodeDigest::compute(email, "123456"),
        Utc::now(),
        Duration::minutes(3),
    )
}

#[test]
fn test_update_inserts_and_removes() {
    let store = InMemoryVerificationStore::new();
    assert!(store.is_empty());

    store.update("a@example.com", |slot| {
        assert!(slot.is_none());
        *slot = Some(record("a@example.com"));
    });
    assert_eq!(store.len(), 1);
    assert!(store.get("a@example.com").is_some());

    store.update("a@example.com", |slot| *slot = None);
    assert!(store.get("a@example.com").is_none());
    assert!(store.is_empty());
}

#[test]
fn test_update_returns_closure_result() {
    let store = InMemoryVerificationStore::new();
    store.update("a@example.com", |slot| *slot = Some(record("a@example.com")));

    let attempts = store.update("a@example.com", |slot| {
        let record = slot.as_mut().unwrap();
        record.attempts += 1;
        record.attempts
    });

    assert_eq!(attempts, 1);
    assert_eq!(store.get("a@example.com").unwrap().attempts, 1);
}

#[test]
fn test_untouched_slot_is_kept() {
    let store = InMemoryVerificationStore::new();
    store.update("a@example.com", |slot| *slot = Some(record("a@example.com")));

    let present = store.update("a@example.com", |slot| slot.is_some());

    assert!(present);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_retain_counts_removed_across_shards() {
    let store = InMemoryVerificationStore::with_shards(4);
    for i in 0..20 {
        let email = format!("user{}@example.com", i);
        store.update(&email, |slot| *slot = Some(record(&email)));
    }
    assert_eq!(store.len(), 20);

    let removed = store.retain(&mut |key, _| !key.starts_with("user1"));

    // user1, user10..user19
    assert_eq!(removed, 11);
    assert_eq!(store.len(), 9);
    assert!(store.get("user2@example.com").is_some());
    assert!(store.get("user15@example.com").is_none());
}

#[test]
fn test_at_least_one_shard() {
    let store = InMemoryVerificationStore::with_shards(0);
    assert_eq!(store.shard_count(), 1);

    store.update("a@example.com", |slot| *slot = Some(record("a@example.com")));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_panicking_update_does_not_poison_store() {
    let store = InMemoryVerificationStore::with_shards(1);
    store.update("a@example.com", |slot| *slot = Some(record("a@example.com")));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        store.update("b@example.com", |_| panic!("boom"));
    }));
    assert!(result.is_err());

    assert!(store.get("a@example.com").is_some());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_panicking_update_keeps_existing_record() {
    let store = InMemoryVerificationStore::new();
    store.update("a@example.com", |slot| {
        let mut record = record("a@example.com");
        record.attempts = 3;
        record.window_count = 4;
        *slot = Some(record);
    });
    let before = store.get("a@example.com").unwrap();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        store.update("a@example.com", |slot| {
            slot.as_mut().unwrap().attempts = 0;
            *slot = None;
            panic!("rng failure");
        });
    }));
    assert!(result.is_err());

    assert_eq!(store.get("a@example.com"), Some(before));
    assert_eq!(store.len(), 1);
}
