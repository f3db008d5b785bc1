use super::*;

#[test]
fn test_new_reads_default() {
    let v = SparseVector::new(4, 1.5);
    assert_eq!(v.len(), 4);
    assert_eq!(v.default_value(), 1.5);
    for i in 0..4 {
        assert_eq!(v.get(i).expect("in range"), 1.5);
    }
    assert_eq!(v.nnz(), 0);
}

#[test]
fn test_zeros() {
    let v = SparseVector::zeros(3);
    assert_eq!(v.to_dense(), vec![0.0, 0.0, 0.0]);
    assert!(!v.is_empty());
}

#[test]
fn test_zero_length() {
    let v = SparseVector::zeros(0);
    assert!(v.is_empty());
    assert!(v.get(0).is_err());
    assert_eq!(v.iter().count(), 0);
    assert!(v.to_dense().is_empty());
}

#[test]
fn test_set_overwrites() {
    let mut v = SparseVector::zeros(5);
    v.set(2, 1.0).expect("in range");
    v.set(2, 7.0).expect("in range");
    assert_eq!(v.get(2).expect("in range"), 7.0);
    assert_eq!(v.nnz(), 1);
}

#[test]
fn test_set_default_clears_entry() {
    let mut v = SparseVector::zeros(5);
    v.set(1, 3.0).expect("in range");
    v.set(1, 0.0).expect("in range");
    assert_eq!(v.nnz(), 0);
    assert_eq!(v.get(1).expect("in range"), 0.0);
}

#[test]
fn test_get_out_of_range() {
    let v = SparseVector::zeros(3);
    let err = v.get(3).unwrap_err();
    assert!(matches!(
        err,
        SpamfoldError::IndexOutOfBounds { index: 3, len: 3 }
    ));
}

#[test]
fn test_set_out_of_range_leaves_vector_untouched() {
    let mut v = SparseVector::zeros(3);
    assert!(v.set(10, 1.0).is_err());
    assert_eq!(v.nnz(), 0);
}

#[test]
fn test_iter_sorted_by_index() {
    let mut v = SparseVector::zeros(100);
    for &idx in &[90, 3, 47, 12] {
        v.set(idx, idx as f64).expect("in range");
    }
    let pairs: Vec<(usize, f64)> = v.iter().collect();
    assert_eq!(pairs, vec![(3, 3.0), (12, 12.0), (47, 47.0), (90, 90.0)]);
}

#[test]
fn test_sum() {
    let mut v = SparseVector::zeros(10);
    v.set(0, 2.0).expect("in range");
    v.set(9, 3.0).expect("in range");
    assert_eq!(v.sum(), 5.0);
}

#[test]
fn test_dot_zero_default() {
    let mut v = SparseVector::zeros(3);
    v.set(1, 2.0).expect("in range");
    let d = v.dot(&[10.0, 20.0, 30.0]).expect("same length");
    assert_eq!(d, 40.0);
}

#[test]
fn test_dot_nonzero_default() {
    let mut v = SparseVector::new(3, 1.0);
    v.set(0, 4.0).expect("in range");
    let d = v.dot(&[1.0, 2.0, 3.0]).expect("same length");
    assert_eq!(d, 4.0 + 2.0 + 3.0);
}

#[test]
fn test_dot_length_mismatch() {
    let v = SparseVector::zeros(3);
    assert!(matches!(
        v.dot(&[1.0, 2.0]),
        Err(SpamfoldError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_equality_ignores_insertion_order() {
    let mut a = SparseVector::zeros(5);
    let mut b = SparseVector::zeros(5);
    a.set(1, 1.0).expect("in range");
    a.set(4, 2.0).expect("in range");
    b.set(4, 2.0).expect("in range");
    b.set(1, 1.0).expect("in range");
    assert_eq!(a, b);
}

#[test]
fn test_serde_roundtrip_preserves_length() {
    let mut v = SparseVector::zeros(8);
    v.set(5, 2.0).expect("in range");
    let json = serde_json::to_string(&v).expect("serialize");
    let back: SparseVector = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.len(), 8);
    assert_eq!(back, v);
}

#[test]
fn test_deserialize_rejects_out_of_range_entry() {
    let json = r#"{"len":2,"default_value":0.0,"entries":{"5":1.0}}"#;
    let result: std::result::Result<SparseVector, _> = serde_json::from_str(json);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("index 5"));
}

#[test]
fn test_deserialize_drops_default_entries() {
    let json = r#"{"len":4,"default_value":1.0,"entries":{"0":1.0,"3":2.0}}"#;
    let v: SparseVector = serde_json::from_str(json).expect("entries in range");
    assert_eq!(v.nnz(), 1);
    assert_eq!(v.to_dense(), vec![1.0, 1.0, 1.0, 2.0]);
}
