//! DKW confidence intervals for the expected value
//!
//! The Dvoretzky-Kiefer-Wolfowitz inequality bounds the maximum deviation
//! between an empirical CDF and the true CDF: with probability at least the
//! confidence level, the true CDF lies within ±ε of the empirical one, where
//! `ε = sqrt(ln(2/α) / 2N)`. Integrating the two shifted curves brackets the
//! true expected value without any distributional assumption.

use crate::traits::MeanIntervalEstimator;
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use dkw_core::Result;
use dkw_ecdf::{Ecdf, Histogram};
use tracing::debug;

/// DKW confidence interval estimator
///
/// Holds a validated confidence level and turns a histogram into an
/// interval around the sample mean. Each call is a pure function of its
/// input; no state is kept between calls.
#[derive(Debug, Clone, Copy)]
pub struct DkwCi {
    confidence_level: ConfidenceLevel,
}

impl DkwCi {
    /// Create a new DKW estimator at the given level
    pub fn new(confidence_level: ConfidenceLevel) -> Self {
        Self { confidence_level }
    }

    /// Create a new DKW estimator from a raw level
    ///
    /// Fails with `InvalidConfidenceLevel` unless the level is a finite
    /// number in [0.5, 1.0].
    pub fn at_level(level: f64) -> Result<Self> {
        Ok(Self::new(ConfidenceLevel::new(level)?))
    }

    /// The DKW band half-width for a sample of `n` observations
    ///
    /// `sqrt(ln(2/alpha) / 2n)`. For `n = 0` (or a level of exactly 1.0)
    /// this is `+inf`; the shift operation saturates on it and the
    /// degenerate expectation paths absorb it.
    pub fn epsilon(&self, n: u64) -> f64 {
        let alpha = self.confidence_level.alpha();
        ((2.0 / alpha).ln() / (2.0 * n as f64)).sqrt()
    }

    /// Confidence interval for the expected value of the histogram
    ///
    /// Returns `None` when no expectation is defined, i.e. the histogram is
    /// empty or all its frequencies are zero.
    pub fn interval(&self, histogram: &Histogram) -> Option<ConfidenceInterval> {
        let cdf = Ecdf::from_histogram(histogram);
        let estimate = cdf.expected_value()?;
        let epsilon = self.epsilon(cdf.n());
        debug!(
            "DKW epsilon {} for n={} at level {}",
            epsilon,
            cdf.n(),
            self.confidence_level
        );
        // Raising the curve moves probability mass toward smaller support
        // values, so the upward-shifted band integrates to the numeric
        // lower bound and the downward-shifted band to the upper.
        let lower = cdf.shift(epsilon).expected_value()?;
        let upper = cdf.shift(-epsilon).expected_value()?;
        Some(ConfidenceInterval::new(
            lower,
            upper,
            estimate,
            self.confidence_level.value(),
        ))
    }
}

impl MeanIntervalEstimator for DkwCi {
    fn interval(&self, histogram: &Histogram) -> Option<ConfidenceInterval> {
        DkwCi::interval(self, histogram)
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level.value()
    }
}
