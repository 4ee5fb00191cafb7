//! Random helpers shared by the buff pipeline
//!
//! Every draw takes an injected `rand::Rng`, so callers decide between a
//! seeded generator (replays, tests) and an entropy-backed one.

pub mod weighted;

pub use weighted::{sample_weighted, WeightTable};

use crate::core::{RepairError, Result};
use rand::Rng;

/// Uniform draw from the inclusive range `[min, max]`.
///
/// Fails with `InvalidConfiguration` when the bounds are not finite,
/// `min > max`, or the width of the range overflows `f64`.
pub fn uniform_inclusive(min: f64, max: f64, rng: &mut impl Rng) -> Result<f64> {
    if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
        return Err(RepairError::InvalidConfiguration(format!(
            "invalid range [{}, {}]",
            min, max
        )));
    }
    if min == max {
        return Ok(min);
    }
    Ok(rng.gen_range(min..=max))
}

/// `percent`% of `value`, rounded half-to-even to `decimals` places
pub fn percent_of_value(percent: f64, value: f64, decimals: u32) -> f64 {
    let raw = percent * value / 100.0;
    let scale = 10f64.powi(decimals as i32);
    (raw * scale).round_ties_even() / scale
}
