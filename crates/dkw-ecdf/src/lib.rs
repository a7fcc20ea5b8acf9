//! Histograms and empirical CDFs for confidence interval estimation
//!
//! This crate provides the data model behind DKW confidence intervals:
//! a validated value→frequency [`Histogram`] and the empirical cumulative
//! distribution function ([`Ecdf`]) derived from it, with the two
//! operations the DKW band needs — translating the curve by an offset and
//! integrating it into an expected value.
//!
//! # Example
//!
//! ```rust
//! use dkw_ecdf::{Ecdf, Histogram};
//!
//! let hist = Histogram::from_pairs([(0.0, 1), (3.0, 0), (5.0, 1), (7.0, 2)]).unwrap();
//! let cdf = Ecdf::from_histogram(&hist);
//!
//! assert_eq!(cdf.ys(), &[0.25, 0.25, 0.5, 1.0]);
//! assert_eq!(cdf.expected_value(), Some(4.75));
//!
//! // Shifting the curve up gives a pessimistic (smaller) expectation.
//! let upper_band = cdf.shift(0.25);
//! assert!(upper_band.expected_value().unwrap() < 4.75);
//! ```

pub mod ecdf;
pub mod types;

pub use ecdf::Ecdf;
pub use types::Histogram;

pub use dkw_core::{Error, Result};
