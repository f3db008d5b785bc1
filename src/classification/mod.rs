//! Reference classifiers.
//!
//! Statistical models are supplied by callers through the
//! [`Classifier`](crate::traits::Classifier) trait. This module only ships a
//! majority-class baseline: any useful spam filter has to beat it, and it gives
//! the cross-validation harness something deterministic to run against.
//!
//! # Example
//!
//! ```
//! use spamfold::classification::MajorityClassifier;
//! use spamfold::prelude::*;
//!
//! let x = vec![SparseVector::zeros(3); 5];
//! let y = vec![false, false, true, false, true];
//!
//! let mut model = MajorityClassifier::new();
//! model.fit(&x, &y).expect("Training data is valid with 5 samples");
//! assert_eq!(model.majority(), Some(false));
//! assert_eq!(model.predict(&x[..2]).expect("fitted"), vec![false, false]);
//! ```

use crate::error::{Result, SpamfoldError};
use crate::primitives::SparseVector;
use crate::traits::Classifier;
use serde::{Deserialize, Serialize};

/// Predicts the most frequent training label for every sample.
///
/// Ties go to ham, so an evenly split training set never flags mail as spam.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MajorityClassifier {
    majority: Option<bool>,
    n_features: Option<usize>,
}

impl MajorityClassifier {
    /// Creates an unfitted baseline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Learned label, `None` before fitting.
    #[must_use]
    pub fn majority(&self) -> Option<bool> {
        self.majority
    }
}

impl Classifier for MajorityClassifier {
    fn fit(&mut self, x: &[SparseVector], y: &[bool]) -> Result<()> {
        if x.is_empty() {
            return Err(SpamfoldError::Classifier(
                "Cannot fit with empty data".to_string(),
            ));
        }
        if x.len() != y.len() {
            return Err(SpamfoldError::dimension_mismatch("samples", x.len(), y.len()));
        }

        let spam = y.iter().filter(|&&label| label).count();
        self.majority = Some(spam * 2 > y.len());
        self.n_features = Some(x[0].len());
        Ok(())
    }

    fn predict(&self, x: &[SparseVector]) -> Result<Vec<bool>> {
        let majority = self
            .majority
            .ok_or_else(|| SpamfoldError::Classifier("Model not fitted".to_string()))?;
        let n_features = self.n_features.unwrap_or(0);

        if let Some(row) = x.iter().find(|row| row.len() != n_features) {
            return Err(SpamfoldError::dimension_mismatch(
                "features",
                n_features,
                row.len(),
            ));
        }

        Ok(vec![majority; x.len()])
    }
}

#[cfg(test)]
mod tests;
