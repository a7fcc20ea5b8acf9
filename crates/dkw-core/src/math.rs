//! Mathematical utilities shared across the dkw-stats crates

/// Clamp a cumulative probability into [0, 1]
///
/// Non-finite inputs saturate: `+inf` clamps to 1, `-inf` to 0. NaN is
/// returned unchanged, matching `f64::clamp`.
pub fn clamp_unit(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}
