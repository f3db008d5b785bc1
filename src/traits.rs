//! Core traits for pluggable classifiers.
//!
//! The cross-validation harness never names a concrete model; it only needs
//! something that can be fitted on count vectors and scored against labels.

use crate::error::Result;
use crate::metrics::accuracy;
use crate::primitives::SparseVector;

/// Binary spam/ham classifier over sparse feature vectors.
///
/// Labels are `true` for spam and `false` for ham. Implementors provide
/// [`fit`](Self::fit) and [`predict`](Self::predict); [`score`](Self::score)
/// defaults to accuracy and may be overridden.
///
/// # Examples
///
/// ```
/// use spamfold::prelude::*;
///
/// let x = vec![SparseVector::zeros(2); 4];
/// let y = vec![true, true, true, false];
///
/// let mut model = MajorityClassifier::new();
/// model.fit(&x, &y).expect("non-empty training data");
/// let score = model.score(&x, &y).expect("model is fitted");
/// assert!((score - 0.75).abs() < 1e-12);
/// ```
pub trait Classifier {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (empty data, misaligned labels, ...).
    fn fit(&mut self, x: &[SparseVector], y: &[bool]) -> Result<()>;

    /// Predicts a label for every row of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or `x` has the wrong shape.
    fn predict(&self, x: &[SparseVector]) -> Result<Vec<bool>>;

    /// Fraction of rows predicted correctly, in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Propagates [`predict`](Self::predict) errors; fails if `x` and `y`
    /// differ in length or are empty.
    fn score(&self, x: &[SparseVector], y: &[bool]) -> Result<f64> {
        let predictions = self.predict(x)?;
        accuracy(&predictions, y)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn fit(&mut self, x: &[SparseVector], y: &[bool]) -> Result<()> {
        (**self).fit(x, y)
    }

    fn predict(&self, x: &[SparseVector]) -> Result<Vec<bool>> {
        (**self).predict(x)
    }

    fn score(&self, x: &[SparseVector], y: &[bool]) -> Result<f64> {
        (**self).score(x, y)
    }
}
