//! High-level API for DKW confidence intervals
//!
//! This module provides one-call functions for the common case: raw
//! (value, frequency) pairs in, interval out, with all validation applied
//! up front.

use crate::dkw::DkwCi;
use crate::types::ConfidenceInterval;
use dkw_core::Result;
use dkw_ecdf::Histogram;

/// Compute a DKW confidence interval for the mean of a histogram
///
/// The pairs must include the smallest and largest possible values even if
/// their frequencies are zero, so the support is not artificially
/// truncated.
///
/// Fails with `InvalidConfidenceLevel` when the level is not a finite
/// number in [0.5, 1.0], and with a data-validation error when a value is
/// non-finite or a frequency negative. Returns `Ok(None)` when the
/// histogram carries no observations.
///
/// # Example
/// ```rust
/// use dkw_confidence::api::dkw_confidence_interval;
///
/// let pairs = [(1.0, 0), (2.0, 3), (3.0, 9), (4.0, 53), (5.0, 144)];
/// let ci = dkw_confidence_interval(pairs, 0.95).unwrap().unwrap();
///
/// assert!(ci.lower < ci.upper);
/// println!("{}", ci);
/// ```
pub fn dkw_confidence_interval<I>(
    pairs: I,
    confidence_level: f64,
) -> Result<Option<ConfidenceInterval>>
where
    I: IntoIterator<Item = (f64, i64)>,
{
    let estimator = DkwCi::at_level(confidence_level)?;
    let histogram = Histogram::from_pairs(pairs)?;
    Ok(estimator.interval(&histogram))
}

/// Total observation count of raw (value, frequency) pairs
///
/// Applies the same validation as histogram construction.
pub fn total_count<I>(pairs: I) -> Result<u64>
where
    I: IntoIterator<Item = (f64, i64)>,
{
    Ok(Histogram::from_pairs(pairs)?.count())
}
