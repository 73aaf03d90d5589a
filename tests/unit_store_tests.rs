//! # Store Module Unit Tests / Store 模块单元测试
//!
//! Tests for the outcome buckets and attached metadata kept by `ResultStore`.
//!
//! 测试 `ResultStore` 维护的结果桶和附加元数据。

use spectra::core::models::{Description, Outcome};
use spectra::core::store::{Recorded, ResultStore, lock_store};

#[cfg(test)]
mod record_outcome_tests {
    use super::*;

    #[test]
    fn test_same_outcome_twice_is_recorded_once() {
        let mut store = ResultStore::new();
        assert_eq!(store.record_outcome("test_a", Outcome::Passed), Recorded::Inserted);
        assert_eq!(store.record_outcome("test_a", Outcome::Passed), Recorded::Duplicate);

        assert_eq!(store.bucket(Outcome::Passed), ["test_a"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_conflicting_outcome_keeps_first_bucket() {
        let mut store = ResultStore::new();
        store.record_outcome("test_a", Outcome::Failed);

        let recorded = store.record_outcome("test_a", Outcome::Passed);

        assert_eq!(
            recorded,
            Recorded::Conflict {
                existing: Outcome::Failed
            }
        );
        assert_eq!(store.bucket(Outcome::Failed), ["test_a"]);
        assert!(store.bucket(Outcome::Passed).is_empty());
        assert_eq!(store.outcome_of("test_a"), Some(Outcome::Failed));
    }

    #[test]
    fn test_buckets_keep_insertion_order() {
        let mut store = ResultStore::new();
        for id in ["test_c", "test_a", "test_b"] {
            store.record_outcome(id, Outcome::Skipped);
        }
        store.record_outcome("test_a", Outcome::Skipped);

        assert_eq!(store.bucket(Outcome::Skipped), ["test_c", "test_a", "test_b"]);
    }

    #[test]
    fn test_counts_per_bucket() {
        let mut store = ResultStore::new();
        assert!(store.is_empty());

        store.record_outcome("p1", Outcome::Passed);
        store.record_outcome("p2", Outcome::Passed);
        store.record_outcome("f1", Outcome::Failed);
        store.record_outcome("s1", Outcome::Skipped);

        assert_eq!(store.counts(), (2, 1, 1));
        assert_eq!(store.len(), 4);
        assert!(!store.is_empty());
        assert_eq!(store.outcome_of("missing"), None);
    }
}

#[cfg(test)]
mod metadata_tests {
    use super::*;

    #[test]
    fn test_attach_starts_without_assertion() {
        let mut store = ResultStore::new();
        store.attach("test_a", Description::from("Simple check"));

        let metadata = store.metadata("test_a").expect("metadata should exist");
        assert_eq!(metadata.description, Description::Line("Simple check".into()));
        assert_eq!(metadata.assertion, None);
    }

    #[test]
    fn test_set_assertion_on_attached_test() {
        let mut store = ResultStore::new();
        store.attach("test_a", Description::from(vec!["step 1", "step 2"]));

        assert!(store.set_assertion("test_a", "1 == 2"));
        assert_eq!(
            store.metadata("test_a").unwrap().assertion.as_deref(),
            Some("1 == 2")
        );
    }

    #[test]
    fn test_set_assertion_without_attach_is_noop() {
        let mut store = ResultStore::new();
        assert!(!store.set_assertion("never_attached", "boom"));
        assert!(store.metadata("never_attached").is_none());
    }

    #[test]
    fn test_reattach_overwrites_description_and_clears_assertion() {
        let mut store = ResultStore::new();
        store.attach("test_a", "first".into());
        store.set_assertion("test_a", "");
        store.attach("test_a", "second".into());

        let metadata = store.metadata("test_a").unwrap();
        assert_eq!(metadata.description, Description::Line("second".into()));
        assert_eq!(metadata.assertion, None);
    }

    #[test]
    fn test_attach_does_not_record_an_outcome() {
        let mut store = ResultStore::new();
        store.attach("test_a", "desc".into());
        assert!(store.is_empty());
        assert_eq!(store.outcome_of("test_a"), None);
    }

    #[test]
    fn test_shared_store_is_usable_through_lock() {
        let shared = ResultStore::shared();
        lock_store(&shared).record_outcome("test_a", Outcome::Passed);
        assert_eq!(lock_store(&shared).counts(), (1, 0, 0));
    }
}
