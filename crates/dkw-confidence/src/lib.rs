//! Distribution-free confidence intervals for the mean
//!
//! This crate brackets the expected value of a bounded discrete random
//! variable given only a histogram of observations, using the
//! Dvoretzky-Kiefer-Wolfowitz (DKW) inequality on the empirical CDF. No
//! distributional assumptions are made; the guarantee holds for any
//! distribution over the declared support.
//!
//! # Overview
//!
//! The pipeline is a linear four-stage computation: validate the level,
//! build the empirical CDF, shift it up and down by the DKW epsilon, and
//! integrate each shifted curve into an expected-value bound.
//!
//! # Examples
//!
//! ```rust
//! use dkw_confidence::{DkwCi, ConfidenceLevel};
//! use dkw_ecdf::Histogram;
//!
//! // Star ratings: the histogram must name every possible value, even
//! // those never observed.
//! let ratings = Histogram::from_pairs([
//!     (1.0, 0),
//!     (2.0, 3),
//!     (3.0, 9),
//!     (4.0, 53),
//!     (5.0, 144),
//! ]).unwrap();
//!
//! let ci = DkwCi::new(ConfidenceLevel::NINETY_FIVE)
//!     .interval(&ratings)
//!     .unwrap();
//! println!("95% CI for the mean rating: [{:.2}, {:.2}]", ci.lower, ci.upper);
//! ```

pub mod api;
mod dkw;
mod traits;
mod types;

// Re-exports
pub use api::{dkw_confidence_interval, total_count};
pub use dkw::DkwCi;
pub use traits::MeanIntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel};

pub use dkw_core::{Error, Result};

// Convenience constructor
pub fn dkw(confidence_level: f64) -> Result<DkwCi> {
    DkwCi::at_level(confidence_level)
}
