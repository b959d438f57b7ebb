//! Per-call seeded draws.
//!
//! Each function builds a ChaCha generator from the seed and takes its first
//! output, so a draw depends on nothing but its arguments.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::seed::Seed;

fn rng_for(seed: Seed) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed.value())
}

/// Uniform value in `[0, 1)`.
pub fn random_unit(seed: Seed) -> f64 {
    rng_for(seed).random::<f64>()
}

/// Uniform value between `min` and `max`.
///
/// Inverted bounds are accepted; the result then lies in `(max, min]`.
pub fn random_float(min: f64, max: f64, seed: Seed) -> f64 {
    min + (max - min) * random_unit(seed)
}

/// Uniform integer in `[min, max]` (inclusive). Bounds may be given in either order.
pub fn random_int(min: i64, max: i64, seed: Seed) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng_for(seed).random_range(lo..=hi)
}

/// Non-reproducible uniform value between `min` and `max`.
///
/// Only for presentation paths whose output is never expected to repeat.
pub fn random_float_unseeded(min: f64, max: f64) -> f64 {
    min + (max - min) * rand::rng().random::<f64>()
}

/// Non-reproducible uniform integer in `[min, max]`.
pub fn random_int_unseeded(min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rand::rng().random_range(lo..=hi)
}

/// Derives the seed of child `index` from a separate keystream of `seed`.
///
/// Property draws read stream 0 of their key, so a child seed shares nothing
/// with its parent's draws. Children come out as full-width values, so the
/// `offset` keys of two siblings never overlap in practice.
pub fn child_seed(seed: Seed, index: u64) -> Seed {
    let mut rng = rng_for(seed);
    rng.set_stream(index.wrapping_add(1));
    Seed::new(rng.random::<u64>().max(1))
}

/// Derives a child seed by dividing by a seed-drawn divisor in `[1, 10]`.
///
/// The result stays a pure function of the parent, so reproducibility carries
/// through any number of generations. A quotient that rounds to 0 maps to 1.
pub fn tweak_seed(seed: Seed) -> Seed {
    let divisor = random_float(1.0, 10.0, seed);
    let tweaked = (seed.value() as f64 / divisor).round() as u64;
    Seed::new(tweaked.max(1))
}
