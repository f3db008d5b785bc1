// =========================================================================
// FALSIFY-KF: k-fold cross-validation contract
//
// For every 2 <= k <= n, split(n, k) yields exactly k folds whose test sets
// partition [0, n) with sizes differing by at most one, and whose train set
// is the exact complement of the test set.
//
// References:
//   - Stone (1974) "Cross-Validatory Choice and Assessment of Predictions"
// =========================================================================

use super::*;
use std::collections::HashSet;

fn check_partition(folds: &[Fold], n: usize, k: usize) -> std::result::Result<(), String> {
    if folds.len() != k {
        return Err(format!("splits={}, expected {k}", folds.len()));
    }

    let mut test_counts = vec![0usize; n];
    for fold in folds {
        let train: HashSet<usize> = fold.train.iter().copied().collect();
        let test: HashSet<usize> = fold.test.iter().copied().collect();
        if train.len() != fold.train.len() || test.len() != fold.test.len() {
            return Err(format!("fold {} repeats an index", fold.index));
        }
        if !train.is_disjoint(&test) {
            return Err(format!("fold {} train/test overlap", fold.index));
        }
        if train.len() + test.len() != n {
            return Err(format!(
                "fold {} covers {} samples, expected {n}",
                fold.index,
                train.len() + test.len()
            ));
        }
        for &idx in &fold.test {
            test_counts[idx] += 1;
        }
    }

    if let Some(i) = test_counts.iter().position(|&c| c != 1) {
        return Err(format!("sample {i} appeared in {} test folds", test_counts[i]));
    }

    let sizes: Vec<usize> = folds.iter().map(|f| f.test.len()).collect();
    let min = sizes.iter().copied().min().unwrap_or(0);
    let max = sizes.iter().copied().max().unwrap_or(0);
    if max - min > 1 {
        return Err(format!("fold sizes {sizes:?} differ by more than one"));
    }
    Ok(())
}

/// FALSIFY-KF-001: K-Fold produces exactly K splits
#[test]
fn falsify_kf_001_produces_k_splits() {
    let folds: Vec<Fold> = KFold::new(5).split(100).expect("valid k").collect();
    assert_eq!(folds.len(), 5, "FALSIFIED KF-001: splits={}", folds.len());
}

/// FALSIFY-KF-002: Non-divisible n keeps sizes within one
#[test]
fn falsify_kf_002_remainder_handling() {
    let n = 17;
    let folds: Vec<Fold> = KFold::new(4).split(n).expect("valid k").collect();
    if let Err(msg) = check_partition(&folds, n, 4) {
        panic!("FALSIFIED KF-002: {msg}");
    }
}

/// FALSIFY-KF-003: Invalid k fails instead of producing partial folds
#[test]
fn falsify_kf_003_invalid_k() {
    for (k, n) in [(0, 10), (1, 10), (11, 10), (2, 1)] {
        assert!(
            KFold::new(k).split(n).is_err(),
            "FALSIFIED KF-003: k={k}, n={n} accepted"
        );
    }
}

mod kf_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// FALSIFY-KF-004-prop: contiguous folds partition [0, n)
        #[test]
        fn falsify_kf_004_prop_partition(
            n in 2..=200usize,
            k in 2..=200usize,
        ) {
            let k = k.min(n);
            let folds: Vec<Fold> = KFold::new(k).split(n).expect("valid k").collect();
            prop_assert!(
                check_partition(&folds, n, k).is_ok(),
                "FALSIFIED KF-004-prop: {:?}",
                check_partition(&folds, n, k)
            );
        }

        /// FALSIFY-KF-005-prop: seeded shuffles partition [0, n) and repeat exactly
        #[test]
        fn falsify_kf_005_prop_shuffled_partition(
            n in 2..=120usize,
            k in 2..=12usize,
            seed in any::<u64>(),
        ) {
            let k = k.min(n);
            let kfold = KFold::new(k).with_random_state(seed);
            let folds: Vec<Fold> = kfold.split(n).expect("valid k").collect();
            prop_assert!(check_partition(&folds, n, k).is_ok());

            let again: Vec<Fold> = kfold.split(n).expect("valid k").collect();
            prop_assert_eq!(folds, again);
        }

        /// FALSIFY-KF-006-prop: stratified folds partition [0, n)
        #[test]
        fn falsify_kf_006_prop_stratified_partition(
            labels in proptest::collection::vec(any::<bool>(), 2..120),
            k in 2..=10usize,
        ) {
            let n = labels.len();
            let k = k.min(n);
            let folds: Vec<Fold> = StratifiedKFold::new(k)
                .folds(&labels)
                .expect("valid k")
                .collect();
            prop_assert!(check_partition(&folds, n, k).is_ok());
        }
    }
}
