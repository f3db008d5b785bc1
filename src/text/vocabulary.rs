//! Bounded vocabulary selection.
//!
//! A [`Vocabulary`] maps each selected token to a dense index in `[0, len)`.
//! [`VocabularySelector`] builds one from a document collection, keeping at most
//! `max_size` tokens ranked by corpus frequency. Ties are broken by ascending
//! token order, so the same corpus always yields the same mapping.
//!
//! # Examples
//!
//! ```
//! use spamfold::text::Document;
//! use spamfold::text::vocabulary::VocabularySelector;
//!
//! let docs = vec![
//!     Document::from_tokens(["buy", "now", "buy"]),
//!     Document::from_tokens(["meeting", "now"]),
//! ];
//!
//! let vocab = VocabularySelector::new(2).build(&docs).expect("valid cap");
//! assert_eq!(vocab.len(), 2);
//! // "buy" and "now" both occur twice; alphabetical order breaks the tie
//! assert_eq!(vocab.index_of("buy"), Some(0));
//! assert_eq!(vocab.index_of("now"), Some(1));
//! assert_eq!(vocab.index_of("meeting"), None);
//! ```

use crate::error::{Result, SpamfoldError};
use crate::text::Document;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Default vocabulary cap.
pub const DEFAULT_MAX_VOCABULARY_SIZE: usize = 10_000;

/// Read-only token → index mapping with contiguous indices.
///
/// Serializes as the ordered token list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from tokens in index order.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::DuplicateToken`] if a token repeats.
    ///
    /// ```
    /// use spamfold::text::vocabulary::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_tokens(["spam", "buy", "now"]).expect("distinct tokens");
    /// assert_eq!(vocab.index_of("now"), Some(2));
    /// assert!(Vocabulary::from_tokens(["a", "a"]).is_err());
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            let token = token.into();
            if vocab.index.contains_key(&token) {
                return Err(SpamfoldError::DuplicateToken(token));
            }
            vocab.index.insert(token.clone(), vocab.tokens.len());
            vocab.tokens.push(token);
        }
        Ok(vocab)
    }

    /// Number of tokens, which is also the feature dimensionality.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True for the empty vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of `token`, if selected.
    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// True if `token` is part of the vocabulary.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Token stored at `index`.
    #[must_use]
    pub fn token_at(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Tokens in index order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// `(token, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| (token.as_str(), idx))
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = SpamfoldError;

    fn try_from(tokens: Vec<String>) -> Result<Self> {
        Self::from_tokens(tokens)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.tokens
    }
}

/// Selects a bounded vocabulary from a document collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySelector {
    max_size: usize,
    min_df: usize,
}

impl VocabularySelector {
    /// Selector keeping at most `max_size` tokens.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            min_df: 1,
        }
    }

    /// Set minimum document frequency threshold.
    ///
    /// Tokens appearing in fewer than `min_df` documents are never selected.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Configured cap.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Configured minimum document frequency.
    #[must_use]
    pub fn min_df(&self) -> usize {
        self.min_df
    }

    /// Learn a vocabulary from `documents`.
    ///
    /// An empty collection yields an empty vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::InvalidConfig`] if `max_size` or `min_df` is zero.
    pub fn build(&self, documents: &[Document]) -> Result<Vocabulary> {
        if self.max_size == 0 {
            return Err(SpamfoldError::invalid_config(
                "max_vocabulary_size",
                self.max_size,
                ">= 1",
            ));
        }
        if self.min_df == 0 {
            return Err(SpamfoldError::invalid_config("min_df", self.min_df, ">= 1"));
        }

        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();

        for doc in documents {
            let mut doc_terms: HashSet<&str> = HashSet::new();
            for token in doc.tokens() {
                *term_freq.entry(token.as_str()).or_insert(0) += 1;
                doc_terms.insert(token.as_str());
            }
            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let distinct = term_freq.len();
        let mut ranked: Vec<(&str, usize)> = term_freq
            .into_iter()
            .filter(|(term, _)| doc_freq.get(term).copied().unwrap_or(0) >= self.min_df)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        if ranked.len() > self.max_size {
            warn!(
                candidates = ranked.len(),
                max_size = self.max_size,
                "vocabulary cap reached, dropping least frequent tokens"
            );
            ranked.truncate(self.max_size);
        }

        let vocab = Vocabulary::from_tokens(ranked.into_iter().map(|(term, _)| term))?;
        debug!(
            documents = documents.len(),
            distinct_tokens = distinct,
            selected = vocab.len(),
            "vocabulary built"
        );
        Ok(vocab)
    }
}

impl Default for VocabularySelector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VOCABULARY_SIZE)
    }
}

/// Build a vocabulary of at most `max_size` tokens from `documents`.
///
/// Shorthand for `VocabularySelector::new(max_size).build(documents)`.
///
/// # Errors
///
/// Returns [`SpamfoldError::InvalidConfig`] if `max_size` is zero.
pub fn build_vocabulary(documents: &[Document], max_size: usize) -> Result<Vocabulary> {
    VocabularySelector::new(max_size).build(documents)
}

#[cfg(test)]
#[path = "vocabulary_tests.rs"]
mod tests;
