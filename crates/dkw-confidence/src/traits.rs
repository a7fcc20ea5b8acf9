//! Core trait for confidence interval estimation

use crate::types::ConfidenceInterval;
use dkw_ecdf::Histogram;

/// An estimator producing a confidence interval for the mean of a histogram
///
/// Implementations are pure: two calls with the same histogram return the
/// same interval, and no state is shared between calls.
pub trait MeanIntervalEstimator {
    /// Calculate the confidence interval for the given histogram
    ///
    /// Returns `None` when the histogram carries no observations and the
    /// expected value is therefore undefined.
    fn interval(&self, histogram: &Histogram) -> Option<ConfidenceInterval>;

    /// Get the confidence level
    fn confidence_level(&self) -> f64;
}
