//! Cross-module invariants for the filter and the validation harness.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordsieve_core::{
    DocumentIndex, IndexConfig, MembershipFilter, QueryOutcome, ValidationHarness,
};

proptest! {
    #[test]
    fn inserted_words_are_always_found(
        words in proptest::collection::vec("[a-z]{1,12}", 1..50)
    ) {
        let mut filter = MembershipFilter::with_expected_elements(words.len(), 0.01);
        for word in &words {
            filter.insert(word).unwrap();
        }

        for word in &words {
            prop_assert!(
                filter.contains(word).unwrap(),
                "false negative for {}",
                word
            );
        }
    }

    #[test]
    fn duplicate_insert_leaves_bit_state_unchanged(word in "[a-z]{1,12}") {
        let mut once = MembershipFilter::with_expected_elements(8, 0.01);
        once.insert(&word).unwrap();

        let mut twice = MembershipFilter::with_expected_elements(8, 0.01);
        twice.insert(&word).unwrap();
        twice.insert(&word).unwrap();

        prop_assert_eq!(once.bits_set(), twice.bits_set());
    }

    #[test]
    fn identical_builds_answer_identically(
        words in proptest::collection::vec("[a-z]{1,8}", 1..30),
        query in "[a-z]{1,8}"
    ) {
        let first = DocumentIndex::build(&words, IndexConfig::default()).unwrap();
        let second = DocumentIndex::build(&words, IndexConfig::default()).unwrap();

        prop_assert_eq!(
            first.query(&query).unwrap(),
            second.query(&query).unwrap(),
            "probe sequences carry no hidden randomness"
        );
    }
}

#[test]
fn self_validation_never_reports_false_negatives() {
    let document: Vec<String> = (0..500).map(|i| format!("word_{}", i)).collect();
    let index = DocumentIndex::build(&document, IndexConfig::default()).unwrap();

    let harness = ValidationHarness::new(document.clone());
    let matrix = harness.validate(index.filter(), &document).unwrap();

    assert_eq!(matrix.false_negatives, 0);
    assert_eq!(matrix.true_positives, 500);
}

#[test]
fn empirical_rate_stays_near_target() {
    let target_fpr = 0.01;
    let document: Vec<String> = (0..2000).map(|i| format!("present_{}", i)).collect();
    let index = DocumentIndex::build(&document, IndexConfig::new(target_fpr).unwrap()).unwrap();

    // Disjoint query set: the prefix guarantees no overlap with the document
    let mut rng = StdRng::seed_from_u64(7);
    let queries: Vec<String> = (0..20_000)
        .map(|_| format!("absent_{:016x}", rng.gen::<u64>()))
        .collect();

    let harness = ValidationHarness::new(document);
    let matrix = harness.validate(index.filter(), &queries).unwrap();

    assert_eq!(matrix.false_negatives, 0);
    assert_eq!(matrix.true_positives, 0);

    let rate = matrix.false_positive_rate();
    assert!(
        rate <= target_fpr * 3.0,
        "empirical rate {} strayed too far above target {}",
        rate,
        target_fpr
    );
}

#[test]
fn absent_queries_on_small_filter_are_never_false_negatives() {
    let document: Vec<String> = ["apple", "banana", "cherry"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let index = DocumentIndex::build(&document, IndexConfig::default()).unwrap();

    // "durian" may be a false positive or a true negative; both are legal
    let outcome = index.query("durian").unwrap();
    assert!(matches!(
        outcome,
        QueryOutcome::MaybePresent | QueryOutcome::DefinitelyAbsent
    ));

    // The inserted words must never be reported absent
    for word in ["apple", "banana", "cherry"] {
        assert_eq!(index.query(word).unwrap(), QueryOutcome::MaybePresent);
    }
}
