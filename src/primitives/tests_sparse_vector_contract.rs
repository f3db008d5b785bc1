// =========================================================================
// FALSIFY-SV: SparseVector contract
//
// A sparse vector must behave exactly like its dense materialization:
// unstored positions read the default, writes are visible immediately,
// and the bounds check never clamps.
// =========================================================================

use super::*;
use proptest::prelude::*;

/// FALSIFY-SV-001: Fresh vector reads the default at every valid index
#[test]
fn falsify_sv_001_fresh_reads_default() {
    let v = SparseVector::new(64, -2.0);
    for i in 0..64 {
        let got = v.get(i).expect("in range");
        assert_eq!(got, -2.0, "FALSIFIED SV-001: index {i} read {got}");
    }
}

/// FALSIFY-SV-002: Out-of-range access fails instead of clamping
#[test]
fn falsify_sv_002_out_of_range_fails() {
    let mut v = SparseVector::zeros(8);
    assert!(v.get(8).is_err(), "FALSIFIED SV-002: get(len) succeeded");
    assert!(v.get(usize::MAX).is_err(), "FALSIFIED SV-002: get(MAX) succeeded");
    assert!(v.set(8, 1.0).is_err(), "FALSIFIED SV-002: set(len) succeeded");
}

/// FALSIFY-SV-003: Iteration only visits stored entries
#[test]
fn falsify_sv_003_iteration_is_sparse() {
    let mut v = SparseVector::zeros(1_000_000);
    v.set(999_999, 1.0).expect("in range");
    v.set(7, 2.0).expect("in range");
    let visited = v.iter().count();
    assert_eq!(visited, 2, "FALSIFIED SV-003: visited {visited} entries");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// FALSIFY-SV-004-prop: get immediately after set returns the set value
    #[test]
    fn falsify_sv_004_prop_get_after_set(
        len in 1usize..500,
        writes in proptest::collection::vec((0usize..500, -1e6f64..1e6), 0..40),
    ) {
        let mut v = SparseVector::zeros(len);
        for (idx, value) in writes {
            let idx = idx % len;
            v.set(idx, value).expect("in range");
            prop_assert_eq!(v.get(idx).expect("in range"), value);
        }
    }

    /// FALSIFY-SV-005-prop: repeated identical sets are idempotent
    #[test]
    fn falsify_sv_005_prop_set_idempotent(
        len in 1usize..200,
        idx in 0usize..200,
        value in -100.0f64..100.0,
    ) {
        let idx = idx % len;
        let mut once = SparseVector::zeros(len);
        once.set(idx, value).expect("in range");
        let mut twice = once.clone();
        twice.set(idx, value).expect("in range");
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.nnz(), twice.nnz());
    }

    /// FALSIFY-SV-006-prop: sparse view agrees with its dense materialization
    #[test]
    fn falsify_sv_006_prop_matches_dense(
        len in 0usize..100,
        default in -5.0f64..5.0,
        writes in proptest::collection::vec((0usize..100, -10.0f64..10.0), 0..30),
    ) {
        let mut v = SparseVector::new(len, default);
        let mut dense = vec![default; len];
        for (idx, value) in writes {
            if idx < len {
                v.set(idx, value).expect("in range");
                dense[idx] = value;
            } else {
                prop_assert!(v.set(idx, value).is_err());
            }
        }
        prop_assert_eq!(v.to_dense(), dense.clone());
        for (i, expected) in dense.iter().enumerate() {
            prop_assert_eq!(v.get(i).expect("in range"), *expected);
        }
        prop_assert_eq!(v.len(), len);
    }
}
