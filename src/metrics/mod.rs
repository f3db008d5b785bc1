//! Evaluation metrics for spam/ham predictions.
//!
//! Spam (`true`) is the positive class.

use crate::error::{Result, SpamfoldError};

fn check_aligned<T>(y_pred: &[T], y_true: &[T]) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(SpamfoldError::dimension_mismatch(
            "labels",
            y_true.len(),
            y_pred.len(),
        ));
    }
    if y_true.is_empty() {
        return Err(SpamfoldError::Other(
            "cannot score empty predictions".to_string(),
        ));
    }
    Ok(())
}

/// Fraction of predictions equal to the truth.
///
/// # Errors
///
/// Fails if the slices differ in length or are empty.
///
/// # Examples
///
/// ```
/// use spamfold::metrics::accuracy;
///
/// let acc = accuracy(&[true, false, true, true], &[true, false, false, true]).expect("aligned");
/// assert!((acc - 0.75).abs() < 1e-12);
/// ```
pub fn accuracy<T: PartialEq>(y_pred: &[T], y_true: &[T]) -> Result<f64> {
    check_aligned(y_pred, y_true)?;

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

/// Counts of a binary spam/ham confusion matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    /// Spam predicted as spam
    pub true_positives: usize,
    /// Ham predicted as spam
    pub false_positives: usize,
    /// Ham predicted as ham
    pub true_negatives: usize,
    /// Spam predicted as ham
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Tally predictions against the truth.
    ///
    /// # Errors
    ///
    /// Fails if the slices differ in length or are empty.
    pub fn from_predictions(y_pred: &[bool], y_true: &[bool]) -> Result<Self> {
        check_aligned(y_pred, y_true)?;

        let mut counts = Self::default();
        for (&p, &t) in y_pred.iter().zip(y_true) {
            match (p, t) {
                (true, true) => counts.true_positives += 1,
                (true, false) => counts.false_positives += 1,
                (false, false) => counts.true_negatives += 1,
                (false, true) => counts.false_negatives += 1,
            }
        }
        Ok(counts)
    }

    /// TP / (TP + FP), or 0 when nothing was flagged.
    #[must_use]
    pub fn precision(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    /// TP / (TP + FN), or 0 when there is no spam.
    #[must_use]
    pub fn recall(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// Harmonic mean of precision and recall.
    #[must_use]
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
