//! Separation model for multi-star systems.
//!
//! Separations are log-normal in AU: log10(d) ~ N(μ, σ). The primary and
//! secondary split their separation inversely by mass so the barycenter stays
//! fixed.

use sampling::{Seed, random_float, sample_log_normal};
use units::{Length, Mass};

use crate::config::MultiplicityConfig;

const SEPARATION_OFFSET: u64 = 1;
const OUTER_SEPARATION_OFFSET: u64 = 3;
const ECCENTRICITY_OFFSET: u64 = 5;

/// Distance between primary and secondary
pub fn pair_separation(seed: Seed, config: &MultiplicityConfig) -> Length {
    Length::from_au(sample_log_normal(
        config.separation_mu,
        config.separation_sigma,
        seed.offset(SEPARATION_OFFSET),
    ))
}

/// Distance of a third star from the pair
pub fn outer_separation(seed: Seed, config: &MultiplicityConfig) -> Length {
    Length::from_au(sample_log_normal(
        config.outer_separation_mu,
        config.outer_separation_sigma,
        seed.offset(OUTER_SEPARATION_OFFSET),
    ))
}

/// Binary eccentricity: U(0, separation·k) with k per AU.
///
/// Wide pairs can exceed 1 here; the orbit clamps it.
pub fn pair_eccentricity(seed: Seed, separation: Length, config: &MultiplicityConfig) -> f64 {
    random_float(
        0.0,
        separation.to_au() * config.eccentricity_per_au,
        seed.offset(ECCENTRICITY_OFFSET),
    )
}

/// Semi-major axes of each star around the barycenter.
///
/// Returns `(a_primary, a_secondary)` with `a_primary = d·m_b / (m_a + m_b)`.
pub fn split_separation(separation: Length, primary: Mass, secondary: Mass) -> (Length, Length) {
    let total = (primary + secondary).to_solar_masses();
    if total <= 0.0 {
        return (separation / 2.0, separation / 2.0);
    }
    let primary_share = secondary.to_solar_masses() / total;
    (separation * primary_share, separation * (1.0 - primary_share))
}
