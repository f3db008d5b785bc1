//! Spamfold: bag-of-words spam filtering with k-fold evaluation in pure Rust.
//!
//! Spamfold turns tokenized emails into fixed-length count vectors over a
//! corpus-derived vocabulary and measures any pluggable classifier with
//! k-fold cross-validation.
//!
//! # Quick Start
//!
//! ```
//! use spamfold::prelude::*;
//!
//! let docs = vec![
//!     Document::from_tokens(["win", "cash", "now"]),
//!     Document::from_tokens(["project", "update"]),
//!     Document::from_tokens(["cheap", "cash"]),
//!     Document::from_tokens(["lunch", "today"]),
//! ];
//! let labels = vec![true, false, true, false];
//!
//! // Vocabulary of at most 100 tokens, most frequent first
//! let vocab = VocabularySelector::new(100).build(&docs).unwrap();
//! let vectors = FeatureBuilder::new(&vocab).build_all(&docs);
//! assert_eq!(vectors[0].len(), vocab.len());
//!
//! // Two-fold accuracy of a baseline model
//! let accuracy = evaluate(&vectors, &labels, 2, MajorityClassifier::new).unwrap();
//! assert!((0.0..=1.0).contains(&accuracy));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Sparse vector storage
//! - [`text`]: Documents, tokenization, stop words, vocabulary and features
//! - [`model_selection`]: K-fold splitting and cross-validation
//! - [`classification`]: Baseline classifier
//! - [`metrics`]: Accuracy and confusion counts
//! - [`pipeline`]: Config-driven end-to-end evaluation

pub mod classification;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod text;
pub mod traits;

pub use error::{Result, SpamfoldError};
pub use primitives::SparseVector;
pub use traits::Classifier;
