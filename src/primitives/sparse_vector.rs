//! Fixed-length sparse vector.

use crate::error::{Result, SpamfoldError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed-length numeric vector stored by exception.
///
/// Only entries that differ from the default value are kept, so a vector over a
/// 10,000-token vocabulary holding a few dozen counts costs a few dozen map slots.
/// Reads and writes are O(1) amortized; indices outside `[0, len)` are rejected.
///
/// # Examples
///
/// ```
/// use spamfold::primitives::SparseVector;
///
/// let mut v = SparseVector::zeros(5);
/// v.set(3, 2.0).expect("index in range");
///
/// assert_eq!(v.get(3).expect("index in range"), 2.0);
/// assert_eq!(v.get(0).expect("index in range"), 0.0);
/// assert_eq!(v.len(), 5);
/// assert_eq!(v.nnz(), 1);
/// assert!(v.get(5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSparseVector")]
pub struct SparseVector {
    len: usize,
    default_value: f64,
    entries: HashMap<usize, f64>,
}

/// Unchecked wire form of [`SparseVector`].
#[derive(Deserialize)]
struct RawSparseVector {
    len: usize,
    default_value: f64,
    entries: HashMap<usize, f64>,
}

impl TryFrom<RawSparseVector> for SparseVector {
    type Error = SpamfoldError;

    fn try_from(raw: RawSparseVector) -> Result<Self> {
        let mut vector = Self::new(raw.len, raw.default_value);
        for (index, value) in raw.entries {
            vector.set(index, value)?;
        }
        Ok(vector)
    }
}

impl SparseVector {
    /// Creates a vector of logical length `len` reading `default_value` everywhere.
    #[must_use]
    pub fn new(len: usize, default_value: f64) -> Self {
        Self {
            len,
            default_value,
            entries: HashMap::new(),
        }
    }

    /// Creates an all-zero vector of logical length `len`.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::new(len, 0.0)
    }

    /// Zero-default vector over entries whose indices are already known to be
    /// in `[0, len)`.
    pub(crate) fn from_counts(len: usize, entries: HashMap<usize, f64>) -> Self {
        debug_assert!(entries.keys().all(|&idx| idx < len));
        debug_assert!(entries.values().all(|&v| v != 0.0));
        Self {
            len,
            default_value: 0.0,
            entries,
        }
    }

    /// Returns the value at `index`, or the default when nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self
            .entries
            .get(&index)
            .copied()
            .unwrap_or(self.default_value))
    }

    /// Stores `value` at `index`, replacing any previous entry.
    ///
    /// Writing the default value clears the slot.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        if value == self.default_value {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
        Ok(())
    }

    /// Logical length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the logical length is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value read at every unstored index.
    #[must_use]
    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// Number of stored (non-default) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterates stored `(index, value)` pairs in ascending index order.
    ///
    /// Cost is proportional to [`nnz`](Self::nnz), never to [`len`](Self::len).
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let mut indices: Vec<usize> = self.entries.keys().copied().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(move |idx| (idx, self.entries[&idx]))
    }

    /// Sum of the stored values.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Dot product with a dense slice of the same length.
    ///
    /// Unstored entries contribute `default_value * dense[i]`, which is skipped for
    /// the common zero default.
    ///
    /// # Errors
    ///
    /// Returns [`SpamfoldError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, dense: &[f64]) -> Result<f64> {
        if dense.len() != self.len {
            return Err(SpamfoldError::dimension_mismatch(
                "dense length",
                self.len,
                dense.len(),
            ));
        }

        let stored: f64 = self.iter().map(|(idx, v)| v * dense[idx]).sum();
        if self.default_value == 0.0 {
            return Ok(stored);
        }

        let unstored: f64 = dense
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.entries.contains_key(idx))
            .map(|(_, d)| self.default_value * d)
            .sum();
        Ok(stored + unstored)
    }

    /// Materializes every position.
    #[must_use]
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![self.default_value; self.len];
        for (idx, value) in &self.entries {
            dense[*idx] = *value;
        }
        dense
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(SpamfoldError::index_out_of_bounds(index, self.len));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sparse_vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_sparse_vector_contract.rs"]
mod tests_sparse_vector_contract;
