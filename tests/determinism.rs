//! Suite and suite-set construction is deterministic.

use joinmark::{build_suite, build_suite_set, patterns, SetupMode, SWEEP_SIZES};

#[test]
fn five_pattern_mapping_yields_five_named_cases() {
    let suite = build_suite(&patterns(), 10, SetupMode::Rebuild);

    assert_eq!(suite.len(), 5);
    assert_eq!(
        suite.case_names(),
        [
            "chain walk, callback resolve",
            "chain walk, resolver object",
            "for-scan over array",
            "futures-unordered set",
            "join_all over ready futures",
        ]
    );
}

#[test]
fn repeated_builds_agree_on_names_and_order() {
    let first = build_suite_set(&patterns(), SetupMode::Rebuild);
    let second = build_suite_set(&patterns(), SetupMode::Rebuild);

    assert_eq!(first.labels(), second.labels());
    for ((label_a, a), (label_b, b)) in first.iter().zip(second.iter()) {
        assert_eq!(label_a, label_b);
        assert_eq!(a.case_names(), b.case_names());
    }
}

#[test]
fn suite_set_spans_the_fixed_sizes_in_order() {
    let set = build_suite_set(&patterns(), SetupMode::Reuse);

    let counts: Vec<usize> = set.iter().map(|(_, suite)| suite.count()).collect();
    assert_eq!(counts, SWEEP_SIZES);

    let labels = set.labels();
    for (label, size) in labels.iter().zip(SWEEP_SIZES) {
        assert_eq!(*label, format!("{size} items"));
    }
}
