use super::*;
use crate::text::vocabulary::build_vocabulary;

fn vocab(tokens: &[&str]) -> Vocabulary {
    Vocabulary::from_tokens(tokens.iter().copied()).expect("distinct tokens")
}

#[test]
fn test_counts_not_increments() {
    let v = vocab(&["spam", "buy", "now"]);
    let doc = Document::from_tokens(["buy", "now", "buy"]);
    let vector = build_vector(&doc, &v);
    assert_eq!(vector.len(), 3);
    assert_eq!(vector.get(0).expect("in range"), 0.0);
    assert_eq!(vector.get(1).expect("in range"), 2.0);
    assert_eq!(vector.get(2).expect("in range"), 1.0);
}

#[test]
fn test_out_of_vocabulary_tokens_ignored() {
    let v = vocab(&["buy"]);
    let doc = Document::from_tokens(["viagra", "cheap", "buy"]);
    let vector = build_vector(&doc, &v);
    assert_eq!(vector.len(), 1);
    assert_eq!(vector.nnz(), 1);
    assert_eq!(vector.sum(), 1.0);
}

#[test]
fn test_document_with_no_known_tokens() {
    let v = vocab(&["buy", "now"]);
    let doc = Document::from_tokens(["hello", "world"]);
    let vector = build_vector(&doc, &v);
    assert_eq!(vector.len(), 2);
    assert_eq!(vector.nnz(), 0);
}

#[test]
fn test_empty_document() {
    let v = vocab(&["buy"]);
    let vector = build_vector(&Document::default(), &v);
    assert_eq!(vector.len(), 1);
    assert_eq!(vector.nnz(), 0);
}

#[test]
fn test_empty_vocabulary_gives_zero_length_vectors() {
    let v = build_vocabulary(&[], 100).expect("valid cap");
    let builder = FeatureBuilder::new(&v);
    assert_eq!(builder.dimension(), 0);
    for doc in [
        Document::from_tokens(["anything"]),
        Document::default(),
        Document::from_tokens(["a", "b", "a"]),
    ] {
        let vector = builder.build_vector(&doc);
        assert_eq!(vector.len(), 0);
        assert!(vector.is_empty());
    }
}

#[test]
fn test_build_all_preserves_order() {
    let v = vocab(&["a", "b"]);
    let docs = vec![
        Document::from_tokens(["a"]),
        Document::from_tokens(["b", "b"]),
        Document::from_tokens(["a", "b", "a"]),
    ];
    let vectors = FeatureBuilder::new(&v).build_all(&docs);
    let dense: Vec<Vec<f64>> = vectors.iter().map(SparseVector::to_dense).collect();
    assert_eq!(
        dense,
        vec![vec![1.0, 0.0], vec![0.0, 2.0], vec![2.0, 1.0]]
    );
}

#[test]
fn test_build_is_deterministic() {
    let v = vocab(&["x", "y", "z"]);
    let doc = Document::from_tokens(["z", "x", "z", "q", "y", "z"]);
    let first = build_vector(&doc, &v);
    for _ in 0..20 {
        let again = build_vector(&doc, &v);
        assert_eq!(again, first);
        assert_eq!(again.iter().collect::<Vec<_>>(), first.iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_builder_exposes_vocabulary() {
    let v = vocab(&["a"]);
    let builder = FeatureBuilder::new(&v);
    assert_eq!(builder.vocabulary().index_of("a"), Some(0));
}
