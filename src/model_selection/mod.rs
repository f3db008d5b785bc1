//! Model selection utilities for k-fold cross-validation.
//!
//! This module provides:
//! - [`KFold`]: contiguous (or reproducibly shuffled) folds
//! - [`StratifiedKFold`]: folds that keep the spam/ham ratio
//! - [`cross_validate`] and [`evaluate`]: fit a fresh classifier per fold and
//!   aggregate the test scores
//!
//! Every fold's test set is disjoint from its train set, the test sets
//! partition `[0, n)`, and fold sizes differ by at most one.

use crate::error::{Result, SpamfoldError};
use crate::primitives::SparseVector;
use crate::traits::Classifier;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `Send` when folds run on the rayon pool, no bound otherwise.
#[cfg(feature = "parallel")]
pub trait MaybeSend: Send {}
#[cfg(feature = "parallel")]
impl<T: Send> MaybeSend for T {}

/// `Send` when folds run on the rayon pool, no bound otherwise.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSend {}
#[cfg(not(feature = "parallel"))]
impl<T> MaybeSend for T {}

/// `Sync` when folds run on the rayon pool, no bound otherwise.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync> MaybeSync for T {}

/// `Sync` when folds run on the rayon pool, no bound otherwise.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T> MaybeSync for T {}

/// One round of cross-validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Position of this fold in the sequence
    pub index: usize,
    /// Sample indices to fit on
    pub train: Vec<usize>,
    /// Sample indices to score on
    pub test: Vec<usize>,
}

impl From<Fold> for (Vec<usize>, Vec<usize>) {
    fn from(fold: Fold) -> Self {
        (fold.train, fold.test)
    }
}

/// Lazy sequence of exactly `n_splits` folds.
///
/// Folds are materialized one at a time. Clone the iterator (or call
/// `split` again) to walk the same folds twice.
#[derive(Debug, Clone)]
pub struct Folds {
    order: Vec<usize>,
    n_splits: usize,
    next_fold: usize,
    start: usize,
}

impl Folds {
    fn new(order: Vec<usize>, n_splits: usize) -> Self {
        Self {
            order,
            n_splits,
            next_fold: 0,
            start: 0,
        }
    }

    /// Folds over a caller-chosen sample order.
    ///
    /// `order` must be a permutation of `[0, order.len())`; fold `i` tests the
    /// `i`-th contiguous chunk of it, with the first `n % k` chunks one longer.
    /// This is the building block for custom [`CrossValidator`]s.
    ///
    /// # Errors
    ///
    /// [`SpamfoldError::InvalidConfig`] if `n_splits` is not in `[2, order.len()]`
    /// or `order` repeats an index, [`SpamfoldError::IndexOutOfBounds`] if an
    /// index is outside `[0, order.len())`.
    ///
    /// ```
    /// use spamfold::model_selection::Folds;
    ///
    /// let folds: Vec<_> = Folds::from_order(vec![3, 2, 1, 0], 2).expect("valid order").collect();
    /// assert_eq!(folds[0].test, vec![3, 2]);
    /// assert_eq!(folds[1].train, vec![3, 2]);
    ///
    /// assert!(Folds::from_order(vec![0, 0, 1], 2).is_err());
    /// ```
    pub fn from_order(order: Vec<usize>, n_splits: usize) -> Result<Self> {
        let n_samples = order.len();
        validate_n_splits(n_splits, n_samples)?;

        let mut seen = vec![false; n_samples];
        for &idx in &order {
            if idx >= n_samples {
                return Err(SpamfoldError::index_out_of_bounds(idx, n_samples));
            }
            if seen[idx] {
                return Err(SpamfoldError::invalid_config(
                    "order",
                    idx,
                    "each sample index exactly once",
                ));
            }
            seen[idx] = true;
        }

        Ok(Self::new(order, n_splits))
    }

    /// Number of samples being split.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.order.len()
    }

    /// Test set size of fold `fold`; the first `n % k` folds take one extra sample.
    fn fold_size(&self, fold: usize) -> usize {
        let n = self.order.len();
        n / self.n_splits + usize::from(fold < n % self.n_splits)
    }
}

impl Iterator for Folds {
    type Item = Fold;

    fn next(&mut self) -> Option<Fold> {
        if self.next_fold >= self.n_splits {
            return None;
        }

        let size = self.fold_size(self.next_fold);
        let start = self.start;
        let end = start + size;

        let test = self.order[start..end].to_vec();
        let mut train = Vec::with_capacity(self.order.len() - size);
        train.extend_from_slice(&self.order[..start]);
        train.extend_from_slice(&self.order[end..]);

        let fold = Fold {
            index: self.next_fold,
            train,
            test,
        };
        self.start = end;
        self.next_fold += 1;
        Some(fold)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n_splits - self.next_fold;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Folds {}

impl FusedIterator for Folds {}

/// Anything that can assign labeled samples to folds.
///
/// Implementations outside this crate build their [`Folds`] with
/// [`Folds::from_order`].
pub trait CrossValidator {
    /// Number of folds produced.
    fn n_splits(&self) -> usize;

    /// Fold sequence for samples with these labels.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::InvalidConfig`] if the fold count is not in
    /// `[2, labels.len()]`.
    fn folds(&self, labels: &[bool]) -> Result<Folds>;
}

fn validate_n_splits(n_splits: usize, n_samples: usize) -> Result<()> {
    if n_splits < 2 {
        return Err(SpamfoldError::invalid_config("n_folds", n_splits, ">= 2"));
    }
    if n_splits > n_samples {
        return Err(SpamfoldError::invalid_config(
            "n_folds",
            n_splits,
            &format!("<= number of samples ({n_samples})"),
        ));
    }
    Ok(())
}

/// Shuffles `indices` in place, seeded when `random_state` is set.
fn shuffle_indices(indices: &mut [usize], random_state: Option<u64>) {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        indices.shuffle(&mut rng);
    }
}

/// K-Fold cross-validator.
///
/// Splits data into K consecutive folds. Each fold is used once as test set
/// while the remaining K-1 folds form the training set.
///
/// # Example
///
/// ```rust
/// use spamfold::model_selection::KFold;
///
/// let folds: Vec<_> = KFold::new(5).split(10).expect("2 <= k <= n").collect();
/// assert_eq!(folds.len(), 5);
/// assert_eq!(folds[0].test, vec![0, 1]);
/// assert_eq!(folds[0].train.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    random_state: Option<u64>,
}

impl KFold {
    /// Create a new K-Fold cross-validator.
    ///
    /// # Arguments
    ///
    /// * `n_splits` - Number of folds. Must be at least 2 and at most the number
    ///   of samples; checked by [`split`](Self::split).
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: false,
            random_state: None,
        }
    }

    /// Enable shuffling before splitting into folds.
    ///
    /// Without a random state the assignment changes on every call.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set random state for reproducible shuffling.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self.shuffle = true; // Shuffle is implied when random_state is set
        self
    }

    /// Generate train/test indices for each fold.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::InvalidConfig`] if `n_splits < 2` or
    /// `n_splits > n_samples`.
    pub fn split(&self, n_samples: usize) -> Result<Folds> {
        validate_n_splits(self.n_splits, n_samples)?;

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            shuffle_indices(&mut indices, self.random_state);
        }

        Ok(Folds::new(indices, self.n_splits))
    }
}

impl CrossValidator for KFold {
    fn n_splits(&self) -> usize {
        self.n_splits
    }

    fn folds(&self, labels: &[bool]) -> Result<Folds> {
        self.split(labels.len())
    }
}

/// Stratified K-Fold cross-validator.
///
/// Keeps the spam/ham ratio of every test fold close to the corpus ratio,
/// which matters for imbalanced corpora. Samples are grouped by label (ham
/// first), optionally shuffled within each group, then dealt round-robin to
/// the folds. Fold sizes still differ by at most one.
///
/// # Example
///
/// ```rust
/// use spamfold::model_selection::{CrossValidator, StratifiedKFold};
///
/// let labels = [false, false, false, false, true, true];
/// let folds: Vec<_> = StratifiedKFold::new(2).folds(&labels).expect("valid k").collect();
///
/// for fold in &folds {
///     let spam = fold.test.iter().filter(|&&i| labels[i]).count();
///     assert_eq!(spam, 1);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    random_state: Option<u64>,
}

impl StratifiedKFold {
    /// Create a new Stratified K-Fold cross-validator.
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: false,
            random_state: None,
        }
    }

    /// Enable shuffling within each class before dealing.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set random state for reproducible shuffling.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self.shuffle = true;
        self
    }
}

impl CrossValidator for StratifiedKFold {
    fn n_splits(&self) -> usize {
        self.n_splits
    }

    fn folds(&self, labels: &[bool]) -> Result<Folds> {
        let n_samples = labels.len();
        validate_n_splits(self.n_splits, n_samples)?;

        let mut grouped: Vec<usize> = Vec::with_capacity(n_samples);
        for class in [false, true] {
            let start = grouped.len();
            grouped.extend((0..n_samples).filter(|&i| labels[i] == class));
            if self.shuffle {
                shuffle_indices(&mut grouped[start..], self.random_state);
            }
        }

        // Position p goes to fold p % k; laying folds out back to back gives
        // exactly the contiguous fold sizes Folds expects.
        let mut order = Vec::with_capacity(n_samples);
        for fold in 0..self.n_splits {
            order.extend(grouped.iter().skip(fold).step_by(self.n_splits).copied());
        }

        Ok(Folds::new(order, self.n_splits))
    }
}

/// Results from cross-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidationResult {
    /// Score for each fold, in fold order
    pub scores: Vec<f64>,
}

impl CrossValidationResult {
    /// Calculate mean score across folds
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    /// Calculate standard deviation of scores
    #[must_use]
    pub fn std(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .scores
            .iter()
            .map(|&score| (score - mean).powi(2))
            .sum::<f64>()
            / self.scores.len() as f64;
        variance.sqrt()
    }

    /// Get minimum score
    #[must_use]
    pub fn min(&self) -> f64 {
        self.scores.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Get maximum score
    #[must_use]
    pub fn max(&self) -> f64 {
        self.scores
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Helper function to extract samples by indices
fn extract_samples(
    vectors: &[SparseVector],
    labels: &[bool],
    indices: &[usize],
) -> (Vec<SparseVector>, Vec<bool>) {
    let x = indices.iter().map(|&idx| vectors[idx].clone()).collect();
    let y = indices.iter().map(|&idx| labels[idx]).collect();
    (x, y)
}

fn run_fold<C, F>(
    fold: &Fold,
    vectors: &[SparseVector],
    labels: &[bool],
    factory: &F,
) -> Result<f64>
where
    C: Classifier,
    F: Fn() -> C,
{
    let (x_train, y_train) = extract_samples(vectors, labels, &fold.train);
    let (x_test, y_test) = extract_samples(vectors, labels, &fold.test);

    let mut model = factory();
    model.fit(&x_train, &y_train)?;
    let score = model.score(&x_test, &y_test)?;

    debug!(
        fold = fold.index,
        train = fold.train.len(),
        test = fold.test.len(),
        score,
        "fold evaluated"
    );
    Ok(score)
}

/// Run cross-validation with a fresh classifier per fold.
///
/// Inputs are validated before any classifier is built: labels must align
/// with vectors and the fold count must lie in `[2, n]`. Classifier errors are
/// returned unchanged and stop the run. With the `parallel` feature folds run
/// on the rayon pool; scores are still reported in fold order.
///
/// # Errors
///
/// [`SpamfoldError::DimensionMismatch`] for misaligned inputs,
/// [`SpamfoldError::InvalidConfig`] for a bad fold count, or whatever the
/// classifier returns from `fit`/`score`.
///
/// # Example
///
/// ```rust
/// use spamfold::model_selection::{cross_validate, KFold};
/// use spamfold::prelude::*;
///
/// let x = vec![SparseVector::zeros(4); 10];
/// let y = vec![false; 10];
///
/// let results = cross_validate(&x, &y, &KFold::new(5), MajorityClassifier::new)
///     .expect("Cross-validation should succeed with valid model and data");
/// assert_eq!(results.scores.len(), 5);
/// assert_eq!(results.mean(), 1.0);
/// ```
pub fn cross_validate<V, C, F>(
    vectors: &[SparseVector],
    labels: &[bool],
    cv: &V,
    classifier_factory: F,
) -> Result<CrossValidationResult>
where
    V: CrossValidator + ?Sized,
    C: Classifier + MaybeSend,
    F: Fn() -> C + MaybeSync,
{
    if vectors.len() != labels.len() {
        return Err(SpamfoldError::dimension_mismatch(
            "labels",
            vectors.len(),
            labels.len(),
        ));
    }

    let folds = cv.folds(labels)?;

    #[cfg(feature = "parallel")]
    let scores = folds
        .collect::<Vec<Fold>>()
        .par_iter()
        .map(|fold| run_fold(fold, vectors, labels, &classifier_factory))
        .collect::<Result<Vec<f64>>>()?;

    #[cfg(not(feature = "parallel"))]
    let scores = folds
        .map(|fold| run_fold(&fold, vectors, labels, &classifier_factory))
        .collect::<Result<Vec<f64>>>()?;

    let result = CrossValidationResult { scores };
    info!(
        folds = result.scores.len(),
        mean = result.mean(),
        std = result.std(),
        "cross-validation finished"
    );
    Ok(result)
}

/// Mean test score of `k`-fold cross-validation over contiguous folds.
///
/// # Errors
///
/// See [`cross_validate`]; `k < 2` or `k > n` fails before any classifier is
/// created.
///
/// # Example
///
/// ```rust
/// use spamfold::model_selection::evaluate;
/// use spamfold::prelude::*;
///
/// let x = vec![SparseVector::zeros(2); 10];
/// let y = vec![true; 10];
/// let acc = evaluate(&x, &y, 5, MajorityClassifier::new).expect("valid k");
/// assert_eq!(acc, 1.0);
///
/// assert!(evaluate(&x, &y, 1, MajorityClassifier::new).is_err());
/// ```
pub fn evaluate<C, F>(
    vectors: &[SparseVector],
    labels: &[bool],
    k: usize,
    classifier_factory: F,
) -> Result<f64>
where
    C: Classifier + MaybeSend,
    F: Fn() -> C + MaybeSync,
{
    cross_validate(vectors, labels, &KFold::new(k), classifier_factory).map(|r| r.mean())
}


#[cfg(test)]
mod tests_kfold_contract;
