//! Bag-of-words feature building.
//!
//! Converts a tokenized [`Document`] into a [`SparseVector`] of term counts
//! against a fixed [`Vocabulary`]. Each distinct in-vocabulary token is counted
//! once; tokens outside the vocabulary are dropped silently.
//!
//! # Examples
//!
//! ```
//! use spamfold::text::Document;
//! use spamfold::text::vectorize::FeatureBuilder;
//! use spamfold::text::vocabulary::Vocabulary;
//!
//! let vocab = Vocabulary::from_tokens(["spam", "buy", "now"]).expect("distinct tokens");
//! let doc = Document::from_tokens(["buy", "now", "buy", "cheap"]);
//!
//! let v = FeatureBuilder::new(&vocab).build_vector(&doc);
//! assert_eq!(v.to_dense(), vec![0.0, 2.0, 1.0]);
//! ```

use crate::primitives::SparseVector;
use crate::text::vocabulary::Vocabulary;
use crate::text::Document;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds count vectors against a borrowed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FeatureBuilder<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> FeatureBuilder<'a> {
    /// Builder producing vectors of length `vocabulary.len()`.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Vocabulary the vectors are built against.
    #[must_use]
    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Output dimensionality.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// Count vector for one document.
    #[must_use]
    pub fn build_vector(&self, document: &Document) -> SparseVector {
        let entries: HashMap<usize, f64> = document
            .term_counts()
            .into_iter()
            .filter_map(|(token, count)| {
                self.vocabulary
                    .index_of(token)
                    .map(|idx| (idx, count as f64))
            })
            .collect();

        SparseVector::from_counts(self.vocabulary.len(), entries)
    }

    /// Count vectors for every document, in input order.
    #[must_use]
    pub fn build_all(&self, documents: &[Document]) -> Vec<SparseVector> {
        #[cfg(feature = "parallel")]
        let vectors = documents
            .par_iter()
            .map(|doc| self.build_vector(doc))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let vectors = documents
            .iter()
            .map(|doc| self.build_vector(doc))
            .collect();

        vectors
    }
}

/// Count vector for `document` against `vocabulary`.
///
/// Shorthand for `FeatureBuilder::new(vocabulary).build_vector(document)`.
#[must_use]
pub fn build_vector(document: &Document, vocabulary: &Vocabulary) -> SparseVector {
    FeatureBuilder::new(vocabulary).build_vector(document)
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod vectorize_contract_falsify;
