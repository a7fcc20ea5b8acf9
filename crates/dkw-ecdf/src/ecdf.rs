//! Empirical cumulative distribution functions

use crate::Histogram;
use dkw_core::clamp_unit;
use std::fmt;
use std::sync::Arc;

/// An empirical CDF over a discrete support
///
/// A step function mapping each support value to the fraction of
/// observations less than or equal to it. Never mutated after construction;
/// [`Ecdf::shift`] returns a new function sharing the same support.
#[derive(Debug, Clone, PartialEq)]
pub struct Ecdf {
    /// Distinct support values, ascending
    xs: Arc<[f64]>,
    /// Cumulative probabilities, one per support value
    ys: Vec<f64>,
    /// Total number of observations
    n: u64,
}

impl Ecdf {
    /// The empty CDF (no support, no observations)
    pub fn empty() -> Self {
        Self {
            xs: Vec::new().into(),
            ys: Vec::new(),
            n: 0,
        }
    }

    /// Build the empirical CDF of a histogram
    ///
    /// Cumulative probabilities are the running frequency sum divided by the
    /// total count. A histogram whose frequencies are all zero produces a
    /// curve of zeros rather than 0/0; `expected_value` treats it as having
    /// no defined expectation either way.
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let n = histogram.count();
        let mut ys = Vec::with_capacity(histogram.len());
        let mut cumulative = 0u64;
        for (_, frequency) in histogram.iter() {
            cumulative += frequency;
            ys.push(if n > 0 {
                cumulative as f64 / n as f64
            } else {
                0.0
            });
        }
        Self {
            xs: histogram.values().into(),
            ys,
            n,
        }
    }

    /// Translate every cumulative probability by `offset`, clamped to [0, 1]
    ///
    /// The support is shared with `self` and the source curve is left
    /// untouched. Non-finite offsets saturate through the clamp, so the
    /// infinite epsilon of a zero-count sample yields a well-formed curve.
    pub fn shift(&self, offset: f64) -> Self {
        let mut ys: Vec<f64> = self.ys.iter().map(|&y| clamp_unit(y + offset)).collect();
        // No larger values are possible, so the final step must carry the
        // full probability mass.
        if let Some(last) = ys.last_mut() {
            *last = 1.0;
        }
        Self {
            xs: Arc::clone(&self.xs),
            ys,
            n: self.n,
        }
    }

    /// Expected value of the distribution described by this CDF
    ///
    /// Computed as the Riemann-Stieltjes sum `Σ xᵢ·(F(xᵢ) − F(xᵢ₋₁))` with
    /// `F(x₋₁) = 0`. Returns `None` when the support is empty or no
    /// observations exist.
    pub fn expected_value(&self) -> Option<f64> {
        if self.xs.is_empty() || self.n == 0 {
            return None;
        }
        if self.xs.len() == 1 {
            // All mass sits on the single support point.
            return Some(self.xs[0]);
        }

        let mut expected = self.xs[0] * self.ys[0];
        for i in 1..self.xs.len() {
            expected += self.xs[i] * (self.ys[i] - self.ys[i - 1]);
        }
        Some(expected)
    }

    /// The support values, ascending
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The cumulative probabilities, one per support value
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Total number of observations behind this CDF
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Number of support values
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if the CDF has an empty support
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl From<&Histogram> for Ecdf {
    fn from(histogram: &Histogram) -> Self {
        Self::from_histogram(histogram)
    }
}

impl fmt::Display for Ecdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ecdf({} steps, n={})", self.len(), self.n)
    }
}
