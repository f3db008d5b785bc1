// =========================================================================
// FALSIFY-FB: bag-of-words feature builder contract
//
// For any document and any vocabulary learned from a corpus containing it,
// the vector length equals the vocabulary size and the stored counts add up
// to the number of in-vocabulary token occurrences.
// =========================================================================

use super::*;
use crate::text::vocabulary::build_vocabulary;
use proptest::prelude::*;

/// FALSIFY-FB-001: worked example from the email domain
#[test]
fn falsify_fb_001_buy_now_buy() {
    let vocab = Vocabulary::from_tokens(["spam", "buy", "now"]).expect("distinct tokens");
    let doc = Document::from_tokens(["buy", "now", "buy"]);
    let vector = build_vector(&doc, &vocab);
    assert_eq!(
        vector.to_dense(),
        vec![0.0, 2.0, 1.0],
        "FALSIFIED FB-001: wrong counts"
    );
}

/// FALSIFY-FB-002: truncated vocabulary still produces full-length vectors
#[test]
fn falsify_fb_002_truncated_vocabulary_length() {
    let corpus = vec![
        Document::from_tokens(["a", "a", "a", "b", "b", "c"]),
        Document::from_tokens(["d", "e"]),
    ];
    let vocab = build_vocabulary(&corpus, 2).expect("valid cap");
    for doc in &corpus {
        let vector = build_vector(doc, &vocab);
        assert_eq!(vector.len(), 2, "FALSIFIED FB-002: len={}", vector.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// FALSIFY-FB-003-prop: length = |vocab|, sum = in-vocabulary occurrences
    #[test]
    fn falsify_fb_003_prop_length_and_mass(
        corpus in proptest::collection::vec(
            proptest::collection::vec("[a-h]{1,2}", 0..15),
            1..6,
        ),
        cap in 1usize..30,
        pick in 0usize..6,
    ) {
        let documents: Vec<Document> = corpus.into_iter().map(Document::new).collect();
        let vocab = build_vocabulary(&documents, cap).expect("valid cap");
        let doc = &documents[pick % documents.len()];

        let vector = build_vector(doc, &vocab);
        prop_assert_eq!(vector.len(), vocab.len());

        let in_vocab = doc.tokens().iter().filter(|t| vocab.contains(t)).count();
        prop_assert_eq!(vector.sum(), in_vocab as f64);

        for (idx, count) in vector.iter() {
            let token = vocab.token_at(idx).expect("index within vocabulary");
            let expected = doc.tokens().iter().filter(|t| t.as_str() == token).count();
            prop_assert_eq!(count, expected as f64);
        }
    }
}
