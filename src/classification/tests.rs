use super::*;

fn rows(n: usize, dim: usize) -> Vec<SparseVector> {
    vec![SparseVector::zeros(dim); n]
}

#[test]
fn test_majority_spam() {
    let mut model = MajorityClassifier::new();
    model
        .fit(&rows(3, 2), &[true, true, false])
        .expect("valid data");
    assert_eq!(model.majority(), Some(true));
    assert_eq!(model.predict(&rows(2, 2)).expect("fitted"), vec![true, true]);
}

#[test]
fn test_tie_goes_to_ham() {
    let mut model = MajorityClassifier::new();
    model
        .fit(&rows(4, 1), &[true, false, true, false])
        .expect("valid data");
    assert_eq!(model.majority(), Some(false));
}

#[test]
fn test_predict_before_fit() {
    let model = MajorityClassifier::new();
    let err = model.predict(&rows(1, 1)).unwrap_err();
    assert!(matches!(err, SpamfoldError::Classifier(_)));
}

#[test]
fn test_fit_empty() {
    let mut model = MajorityClassifier::new();
    assert!(model.fit(&[], &[]).is_err());
}

#[test]
fn test_fit_misaligned() {
    let mut model = MajorityClassifier::new();
    let err = model.fit(&rows(2, 1), &[true]).unwrap_err();
    assert!(matches!(err, SpamfoldError::DimensionMismatch { .. }));
}

#[test]
fn test_predict_wrong_dimension() {
    let mut model = MajorityClassifier::new();
    model.fit(&rows(2, 3), &[true, true]).expect("valid data");
    let err = model.predict(&rows(1, 4)).unwrap_err();
    assert!(matches!(err, SpamfoldError::DimensionMismatch { .. }));
}

#[test]
fn test_score_is_class_share() {
    let mut model = MajorityClassifier::new();
    let y = [false, false, false, true];
    model.fit(&rows(4, 1), &y).expect("valid data");
    let score = model.score(&rows(4, 1), &y).expect("fitted");
    assert!((score - 0.75).abs() < 1e-12);
}

#[test]
fn test_refit_replaces_state() {
    let mut model = MajorityClassifier::new();
    model.fit(&rows(1, 1), &[true]).expect("valid data");
    model.fit(&rows(1, 1), &[false]).expect("valid data");
    assert_eq!(model.majority(), Some(false));
}
