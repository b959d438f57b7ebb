use std::f64::consts::PI;

use crate::draw::random_unit;
use crate::seed::Seed;

/// Sample from a Gaussian (normal) distribution using the Box-Muller transform
///
/// The two uniforms come from `seed` and `seed.offset(1)`, so the result is a
/// pure function of `seed`.
///
/// # Arguments
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
/// * `seed` - Draw key
pub fn sample_gaussian(mean: f64, std_dev: f64, seed: Seed) -> f64 {
    let u1 = random_unit(seed).max(f64::MIN_POSITIVE);
    let u2 = random_unit(seed.offset(1));
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample a value whose base-10 logarithm is normally distributed
///
/// Used for stellar companion separations, where `mu` and `sigma` are given in
/// log10 of the output unit.
pub fn sample_log_normal(mu: f64, sigma: f64, seed: Seed) -> f64 {
    10.0_f64.powf(sample_gaussian(mu, sigma, seed))
}
