//! Random batch generation.
//!
//! Produces reproducible burst-time batches for experiments and
//! invariant checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `count` burst times uniformly in `min..=max`.
///
/// Deterministic for a given seed. Bounds are swapped if given reversed.
pub fn random_bursts(count: usize, min: i64, max: i64, seed: u64) -> Vec<i64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(lo..=hi)).collect()
}
