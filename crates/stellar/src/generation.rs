//! Seeded star generation.

use sampling::{Seed, random_float};
use tracing::debug;
use units::{Mass, Time};

use crate::star::{MAX_STELLAR_MASS, MIN_STELLAR_MASS, Star};

/// Star generator parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGen {
    /// Upper mass cap in solar masses; never above [`MAX_STELLAR_MASS`]
    pub max_mass: f64,
}

impl Default for StarGen {
    fn default() -> Self {
        Self {
            max_mass: MAX_STELLAR_MASS,
        }
    }
}

impl StarGen {
    pub fn new(max_mass: f64) -> Self {
        Self {
            max_mass: max_mass.clamp(MIN_STELLAR_MASS, MAX_STELLAR_MASS),
        }
    }

    /// Generates the star for `seed`, aged to `age` when one is already known.
    pub fn generate(&self, seed: Seed, age: Option<Time>) -> Star {
        let mass = sample_stellar_mass(seed).min(Mass::from_solar_masses(self.max_mass));
        let star = Star::from_mass(mass);

        debug!(
            %seed,
            mass = star.mass.to_solar_masses(),
            temperature = star.temperature.to_kelvin(),
            class = %star.spectral_class,
            "generated star"
        );

        match age {
            Some(age) => star.with_age(age),
            None => star,
        }
    }
}

/// Generates a star with the default mass range.
pub fn generate_star(seed: Seed, age: Option<Time>) -> Star {
    StarGen::default().generate(seed, age)
}

/// Draws a stellar mass from one uniform percentile.
///
/// `M = 0.1 + (-0.374495·x)/(-1.073858 + x)` maps `x ∈ [0, 1)` onto a curve that
/// favours low-mass stars, clamped to 0.1-5 M☉.
pub fn sample_stellar_mass(seed: Seed) -> Mass {
    let x = random_float(0.0, 1.0, seed);
    let mass = 0.1 + (-0.374495 * x) / (-1.073858 + x);
    Mass::from_solar_masses(mass.clamp(MIN_STELLAR_MASS, MAX_STELLAR_MASS))
}
