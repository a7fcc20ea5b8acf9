//! dkw-stats: distribution-free confidence intervals for histogram means
//!
//! An umbrella crate re-exporting the workspace members:
//!
//! - [`dkw_core`]: shared error taxonomy and numeric helpers
//! - [`dkw_ecdf`]: validated histograms and empirical CDFs
//! - [`dkw_confidence`]: the DKW interval estimator and high-level API
//!
//! # Example
//!
//! ```rust
//! use dkw_stats::dkw_confidence_interval;
//!
//! let ratings = [(1.0, 0), (2.0, 3), (3.0, 9), (4.0, 53), (5.0, 144)];
//! let ci = dkw_confidence_interval(ratings, 0.95).unwrap().unwrap();
//!
//! assert!(ci.contains(ci.estimate));
//! println!("{}", ci);
//! ```

pub use dkw_core;
pub use dkw_ecdf;
pub use dkw_confidence;

// The common surface, flattened for convenience
pub use dkw_core::{Error, Result};
pub use dkw_ecdf::{Ecdf, Histogram};
pub use dkw_confidence::{
    dkw, dkw_confidence_interval, total_count, ConfidenceInterval, ConfidenceLevel, DkwCi,
    MeanIntervalEstimator,
};
