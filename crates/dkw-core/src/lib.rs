//! Core types for DKW confidence interval estimation
//!
//! This crate provides the error taxonomy and small numeric helpers shared
//! by the dkw-stats crates. Input validation failures are expressed through
//! a single [`Error`] enum so callers can match broadly (any invalid input)
//! or narrowly (a specific kind).

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::clamp_unit;
