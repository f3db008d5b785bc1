//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use spamfold::prelude::*;
//! ```

pub use crate::classification::MajorityClassifier;
pub use crate::error::SpamfoldError;
pub use crate::metrics::{accuracy, ConfusionCounts};
pub use crate::model_selection::{
    cross_validate, evaluate, CrossValidationResult, CrossValidator, KFold, StratifiedKFold,
};
pub use crate::pipeline::{PipelineConfig, SpamPipeline};
pub use crate::primitives::SparseVector;
pub use crate::text::stopwords::StopWordsFilter;
pub use crate::text::tokenize::{WhitespaceTokenizer, WordTokenizer};
pub use crate::text::vectorize::FeatureBuilder;
pub use crate::text::vocabulary::{Vocabulary, VocabularySelector};
pub use crate::text::{Document, Tokenizer};
pub use crate::traits::Classifier;
