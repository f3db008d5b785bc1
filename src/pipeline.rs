//! End-to-end spam evaluation pipeline.
//!
//! Runs documents → vocabulary → count vectors → k-fold cross-validation from a
//! single [`PipelineConfig`]. Corpus loading, tokenization and the classifier
//! itself are supplied by the caller.
//!
//! # Examples
//!
//! ```
//! use spamfold::pipeline::{PipelineConfig, SpamPipeline};
//! use spamfold::prelude::*;
//!
//! let docs = vec![
//!     Document::from_tokens(["cheap", "pills", "now"]),
//!     Document::from_tokens(["lunch", "tomorrow"]),
//!     Document::from_tokens(["win", "cash", "now"]),
//!     Document::from_tokens(["meeting", "notes"]),
//! ];
//! let labels = vec![true, false, true, false];
//!
//! let config = PipelineConfig::new().with_n_folds(2).with_max_vocabulary_size(50);
//! let report = SpamPipeline::new(config)
//!     .evaluate(&docs, &labels, MajorityClassifier::new)
//!     .expect("valid corpus");
//!
//! assert_eq!(report.cv.scores.len(), 2);
//! assert!(report.vocabulary_size <= 50);
//! ```

use crate::error::{Result, SpamfoldError};
use crate::model_selection::{
    cross_validate, CrossValidationResult, CrossValidator, KFold, MaybeSend, MaybeSync,
    StratifiedKFold,
};
use crate::primitives::SparseVector;
use crate::text::stopwords::StopWordsFilter;
use crate::text::vectorize::FeatureBuilder;
use crate::text::vocabulary::{Vocabulary, VocabularySelector, DEFAULT_MAX_VOCABULARY_SIZE};
use crate::text::{Document, Tokenizer};
use crate::traits::Classifier;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default number of folds.
pub const DEFAULT_N_FOLDS: usize = 10;

/// Parameters for one pipeline run.
///
/// ```
/// use spamfold::pipeline::PipelineConfig;
///
/// let config = PipelineConfig::from_json(r#"{"n_folds": 5, "random_state": 7}"#)
///     .expect("valid JSON");
/// assert_eq!(config.n_folds, 5);
/// assert_eq!(config.max_vocabulary_size, 10_000);
/// assert!(config.shuffle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPipelineConfig")]
pub struct PipelineConfig {
    /// Number of cross-validation folds (k)
    pub n_folds: usize,
    /// Vocabulary cap (V)
    pub max_vocabulary_size: usize,
    /// Minimum number of documents a token must appear in
    pub min_df: usize,
    /// Shuffle samples before assigning folds
    pub shuffle: bool,
    /// Seed for reproducible shuffling; implies `shuffle`
    pub random_state: Option<u64>,
    /// Keep the spam/ham ratio in every fold
    pub stratified: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n_folds: DEFAULT_N_FOLDS,
            max_vocabulary_size: DEFAULT_MAX_VOCABULARY_SIZE,
            min_df: 1,
            shuffle: false,
            random_state: None,
            stratified: false,
        }
    }
}

/// Wire form of [`PipelineConfig`]; absent fields take their defaults.
#[derive(Deserialize)]
struct RawPipelineConfig {
    n_folds: Option<usize>,
    max_vocabulary_size: Option<usize>,
    min_df: Option<usize>,
    shuffle: Option<bool>,
    random_state: Option<u64>,
    stratified: Option<bool>,
}

impl From<RawPipelineConfig> for PipelineConfig {
    fn from(raw: RawPipelineConfig) -> Self {
        let defaults = Self::default();
        Self {
            n_folds: raw.n_folds.unwrap_or(defaults.n_folds),
            max_vocabulary_size: raw
                .max_vocabulary_size
                .unwrap_or(defaults.max_vocabulary_size),
            min_df: raw.min_df.unwrap_or(defaults.min_df),
            // A seed only matters for shuffled folds
            shuffle: raw.shuffle.unwrap_or(defaults.shuffle) || raw.random_state.is_some(),
            random_state: raw.random_state,
            stratified: raw.stratified.unwrap_or(defaults.stratified),
        }
    }
}

impl PipelineConfig {
    /// Configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of folds.
    #[must_use]
    pub fn with_n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }

    /// Set the vocabulary cap.
    #[must_use]
    pub fn with_max_vocabulary_size(mut self, max_vocabulary_size: usize) -> Self {
        self.max_vocabulary_size = max_vocabulary_size;
        self
    }

    /// Set minimum document frequency.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Enable shuffling before fold assignment.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set random state for reproducible fold assignment.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self.shuffle = true;
        self
    }

    /// Use stratified folds.
    #[must_use]
    pub fn with_stratified(mut self, stratified: bool) -> Self {
        self.stratified = stratified;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::Serialization`] on malformed JSON and
    /// [`SpamfoldError::InvalidConfig`] if a value fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check values that do not depend on the corpus.
    ///
    /// `n_folds <= n` is checked once the corpus size is known.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::InvalidConfig`] for the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.n_folds < 2 {
            return Err(SpamfoldError::invalid_config("n_folds", self.n_folds, ">= 2"));
        }
        if self.max_vocabulary_size == 0 {
            return Err(SpamfoldError::invalid_config(
                "max_vocabulary_size",
                self.max_vocabulary_size,
                ">= 1",
            ));
        }
        if self.min_df == 0 {
            return Err(SpamfoldError::invalid_config("min_df", self.min_df, ">= 1"));
        }
        Ok(())
    }

    fn selector(&self) -> VocabularySelector {
        VocabularySelector::new(self.max_vocabulary_size).with_min_df(self.min_df)
    }

    fn cross_validator(&self) -> Box<dyn CrossValidator> {
        if self.stratified {
            let mut cv = StratifiedKFold::new(self.n_folds).with_shuffle(self.shuffle);
            if let Some(seed) = self.random_state {
                cv = cv.with_random_state(seed);
            }
            Box::new(cv)
        } else {
            let mut cv = KFold::new(self.n_folds).with_shuffle(self.shuffle);
            if let Some(seed) = self.random_state {
                cv = cv.with_random_state(seed);
            }
            Box::new(cv)
        }
    }
}

/// Outcome of [`SpamPipeline::evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Number of documents evaluated
    pub n_documents: usize,
    /// Number of spam labels
    pub n_spam: usize,
    /// Selected vocabulary size (feature dimensionality)
    pub vocabulary_size: usize,
    /// Per-fold scores
    pub cv: CrossValidationResult,
}

impl PipelineReport {
    /// Mean accuracy across folds.
    #[must_use]
    pub fn mean_accuracy(&self) -> f64 {
        self.cv.mean()
    }
}

/// Feature extraction and evaluation driver.
#[derive(Debug, Clone, Default)]
pub struct SpamPipeline {
    config: PipelineConfig,
}

impl SpamPipeline {
    /// Pipeline with the given configuration.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Learn a vocabulary from `documents` and vectorize each of them.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::InvalidConfig`] for an invalid configuration.
    pub fn vectorize(&self, documents: &[Document]) -> Result<(Vocabulary, Vec<SparseVector>)> {
        self.config.validate()?;
        let vocabulary = self.config.selector().build(documents)?;
        let vectors = FeatureBuilder::new(&vocabulary).build_all(documents);
        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "corpus vectorized"
        );
        Ok((vocabulary, vectors))
    }

    /// Vectorize `documents` and cross-validate a classifier over them.
    ///
    /// Configuration, label alignment and fold count are all checked before
    /// the vocabulary is built or any classifier is created.
    ///
    /// # Errors
    ///
    /// [`SpamfoldError::InvalidConfig`], [`SpamfoldError::DimensionMismatch`],
    /// or the classifier's own errors.
    pub fn evaluate<C, F>(
        &self,
        documents: &[Document],
        labels: &[bool],
        classifier_factory: F,
    ) -> Result<PipelineReport>
    where
        C: Classifier + MaybeSend,
        F: Fn() -> C + MaybeSync,
    {
        self.config.validate()?;
        if documents.len() != labels.len() {
            return Err(SpamfoldError::dimension_mismatch(
                "labels",
                documents.len(),
                labels.len(),
            ));
        }
        let cv = self.config.cross_validator();
        // Fail on k > n before spending time on the vocabulary
        cv.folds(labels)?;

        let (vocabulary, vectors) = self.vectorize(documents)?;
        let result = cross_validate(&vectors, labels, cv.as_ref(), classifier_factory)?;

        let report = PipelineReport {
            n_documents: documents.len(),
            n_spam: labels.iter().filter(|&&l| l).count(),
            vocabulary_size: vocabulary.len(),
            cv: result,
        };
        info!(
            documents = report.n_documents,
            spam = report.n_spam,
            mean_accuracy = report.mean_accuracy(),
            "pipeline finished"
        );
        Ok(report)
    }

    /// Tokenize raw texts, drop stop words, then [`evaluate`](Self::evaluate).
    ///
    /// # Errors
    ///
    /// Tokenizer errors, plus everything [`evaluate`](Self::evaluate) returns.
    pub fn evaluate_texts<S, T, C, F>(
        &self,
        texts: &[S],
        labels: &[bool],
        tokenizer: &T,
        stop_words: Option<&StopWordsFilter>,
        classifier_factory: F,
    ) -> Result<PipelineReport>
    where
        S: AsRef<str>,
        T: Tokenizer + ?Sized,
        C: Classifier + MaybeSend,
        F: Fn() -> C + MaybeSync,
    {
        let documents = tokenize_corpus(texts, tokenizer, stop_words)?;
        self.evaluate(&documents, labels, classifier_factory)
    }
}

/// Tokenize every text into a [`Document`], removing stop words if a filter is given.
///
/// # Errors
///
/// Propagates tokenizer errors.
pub fn tokenize_corpus<S, T>(
    texts: &[S],
    tokenizer: &T,
    stop_words: Option<&StopWordsFilter>,
) -> Result<Vec<Document>>
where
    S: AsRef<str>,
    T: Tokenizer + ?Sized,
{
    texts
        .iter()
        .map(|text| {
            let tokens = tokenizer.tokenize(text.as_ref())?;
            let tokens = match stop_words {
                Some(filter) => filter.filter_owned(tokens),
                None => tokens,
            };
            Ok(Document::new(tokens))
        })
        .collect()
}

/// Parse a corpus label column: `"spam"` is `true`, `"ham"` is `false`.
///
/// Surrounding whitespace is ignored; anything else is rejected.
///
/// # Errors
///
/// Returns [`SpamfoldError::Other`] for unknown labels.
///
/// ```
/// use spamfold::pipeline::parse_label;
///
/// assert!(parse_label("spam").expect("known label"));
/// assert!(!parse_label(" ham\n").expect("known label"));
/// assert!(parse_label("maybe").is_err());
/// ```
pub fn parse_label(label: &str) -> Result<bool> {
    match label.trim() {
        "spam" => Ok(true),
        "ham" => Ok(false),
        other => Err(SpamfoldError::Other(format!(
            "unknown label {other:?}, expected \"spam\" or \"ham\""
        ))),
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
