//! Stop word filtering.
//!
//! Curating stop word lists is outside the scope of this crate; the built-in
//! English list is a short, fixed set of function words so the pipeline works
//! out of the box. Supply your own list with [`StopWordsFilter::new`].
//!
//! # Examples
//!
//! ```
//! use spamfold::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! let tokens = vec!["the".to_string(), "free".to_string(), "offer".to_string()];
//! assert_eq!(filter.filter_owned(tokens), vec!["free", "offer"]);
//! ```

use std::collections::HashSet;

/// Removes stop words from token lists.
///
/// Matching is case-insensitive; tokens that survive keep their original case.
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from a custom word list.
    ///
    /// ```
    /// use spamfold::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(["re", "fwd"]);
    /// assert!(filter.is_stop_word("RE"));
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the built-in English list.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Filter borrowed tokens, returning owned survivors.
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.is_stop_word(t))
            .map(ToString::to_string)
            .collect()
    }

    /// Filter owned tokens without re-allocating survivors.
    #[must_use]
    pub fn filter_owned(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Built-in English function words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "i", "me", "my", "we", "our", "you", "your", "he", "him", "his",
    "she", "her", "it", "its", "they", "them", "their", "what", "which", "who", "whom",
    "this", "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "between", "into", "through", "during", "before", "after", "to", "from", "up",
    "down", "in", "out", "on", "off", "over", "under", "then", "there", "here", "when",
    "where", "why", "how", "all", "any", "both", "each", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "can", "will", "just", "should",
];
