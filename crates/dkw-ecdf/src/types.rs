//! Histogram input type

use dkw_core::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// A validated mapping from observed value to frequency
///
/// Entries are stored sorted ascending by value, so nothing downstream
/// depends on the iteration order of the input. Frequencies are validated
/// to be non-negative at construction; zero frequencies are kept, since an
/// explicit zero-count entry pins a support boundary that would otherwise
/// be truncated. For the confidence interval to be valid, the histogram
/// must include the smallest and largest possible values even when their
/// frequencies are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// (value, frequency) pairs, ascending by value, values distinct
    entries: Vec<(f64, u64)>,
}

impl Histogram {
    /// Build a histogram from (value, frequency) pairs
    ///
    /// Values must be finite and frequencies non-negative. Pairs with equal
    /// values are merged by summing their frequencies.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        let mut entries: Vec<(f64, u64)> = Vec::new();
        for (value, frequency) in pairs {
            if !value.is_finite() {
                return Err(Error::invalid_value(value));
            }
            if frequency < 0 {
                return Err(Error::invalid_frequency(value, frequency));
            }
            let frequency = frequency as u64;
            let position = entries
                .binary_search_by(|(v, _)| v.partial_cmp(&value).unwrap_or(Ordering::Equal));
            match position {
                Ok(i) => entries[i].1 += frequency,
                Err(i) => entries.insert(i, (value, frequency)),
            }
        }
        Ok(Self { entries })
    }

    /// Total number of observations (the sum of all frequencies)
    pub fn count(&self) -> u64 {
        self.entries.iter().map(|&(_, frequency)| frequency).sum()
    }

    /// Number of distinct values in the support
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the histogram has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (value, frequency) pairs in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Get the distinct values as a vector, ascending
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|&(value, _)| value).collect()
    }

    /// Get the frequencies as a vector, in ascending value order
    pub fn frequencies(&self) -> Vec<u64> {
        self.entries.iter().map(|&(_, frequency)| frequency).collect()
    }

    /// Smallest value in the support
    pub fn min(&self) -> Option<f64> {
        self.entries.first().map(|&(value, _)| value)
    }

    /// Largest value in the support
    pub fn max(&self) -> Option<f64> {
        self.entries.last().map(|&(value, _)| value)
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} values, n={}, range=[{:?}, {:?}])",
            self.len(),
            self.count(),
            self.min(),
            self.max()
        )
    }
}
