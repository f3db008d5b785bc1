//! Text processing: documents, reference tokenizers, vocabulary selection and
//! bag-of-words feature building.
//!
//! # Example
//!
//! ```
//! use spamfold::text::{Document, Tokenizer};
//! use spamfold::text::tokenize::WordTokenizer;
//! use spamfold::text::vocabulary::VocabularySelector;
//! use spamfold::text::vectorize::FeatureBuilder;
//!
//! let tokenizer = WordTokenizer::new();
//! let docs: Vec<Document> = ["Buy now!", "Meeting at noon"]
//!     .iter()
//!     .map(|t| Document::new(tokenizer.tokenize(t).expect("tokenize should succeed")))
//!     .collect();
//!
//! let vocab = VocabularySelector::new(100).build(&docs).expect("valid cap");
//! let vectors = FeatureBuilder::new(&vocab).build_all(&docs);
//! assert_eq!(vectors.len(), 2);
//! assert_eq!(vectors[0].len(), vocab.len());
//! ```

use crate::error::Result;
use std::collections::HashMap;

pub mod stopwords;
pub mod tokenize;
pub mod vectorize;
pub mod vocabulary;

/// Splits raw text into tokens.
///
/// The pipeline only ever sees the output of an implementation of this trait;
/// callers may plug in any tokenizer they like.
pub trait Tokenizer {
    /// Tokenize `text`.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// An ordered, immutable sequence of normalized tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    /// Wraps already-normalized tokens.
    #[must_use]
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Builds a document from anything string-like.
    ///
    /// ```
    /// use spamfold::text::Document;
    ///
    /// let doc = Document::from_tokens(["buy", "now", "buy"]);
    /// assert_eq!(doc.len(), 3);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokens in document order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the document has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Occurrence count of each distinct token.
    #[must_use]
    pub fn term_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in &self.tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<String>> for Document {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}
