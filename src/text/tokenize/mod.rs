//! Reference tokenizers.
//!
//! Tokenization is an external concern of the pipeline: anything implementing
//! [`Tokenizer`] can be plugged in. These two cover the common email case of
//! whitespace splitting and lower-cased alphanumeric words.

use crate::error::Result;
use crate::text::Tokenizer;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Punctuation stays attached to words and case is preserved.
///
/// # Examples
///
/// ```
/// use spamfold::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Hello,  world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
///
/// let tokens = tokenizer.tokenize("line1\nline2\ttab").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["line1", "line2", "tab"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}

/// Word tokenizer producing lower-cased alphanumeric runs.
///
/// Every non-alphanumeric character except an inner apostrophe ends a token and
/// is dropped, so `"Don't BUY now!!"` becomes `["don't", "buy", "now"]`.
///
/// # Examples
///
/// ```
/// use spamfold::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("Don't BUY now!!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["don't", "buy", "now"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    lowercase: bool,
}

impl WordTokenizer {
    /// Create a new lower-casing word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    /// Set whether to convert to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    fn push_token(&self, tokens: &mut Vec<String>, current: &mut String) {
        let word = current.trim_matches('\'');
        if !word.is_empty() {
            if self.lowercase {
                tokens.push(word.to_lowercase());
            } else {
                tokens.push(word.to_string());
            }
        }
        current.clear();
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() || ch == '\'' {
                current.push(ch);
            } else {
                self.push_token(&mut tokens, &mut current);
            }
        }
        self.push_token(&mut tokens, &mut current);

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests;
